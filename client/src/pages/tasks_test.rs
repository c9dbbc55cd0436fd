use super::*;
use serde_json::json;

fn task(id: i64, status: &str) -> Task {
    serde_json::from_value(json!({"id": id, "title": format!("t{id}"), "status": status})).unwrap()
}

#[test]
fn task_input_trims_and_drops_blank_optionals() {
    let input = task_input("  Write report ", "   ", "reviewed", "2025-07-10").unwrap();
    assert_eq!(input.title, "Write report");
    assert_eq!(input.description, None);
    assert_eq!(input.status, TaskStatus::Reviewed);
    assert_eq!(input.deadline.as_deref(), Some("2025-07-10"));
}

#[test]
fn task_input_requires_title() {
    assert_eq!(task_input(" ", "", "pending", ""), Err("Title is required".to_owned()));
}

#[test]
fn task_input_rejects_unknown_status() {
    assert_eq!(task_input("t", "", "archived", ""), Err("unknown task status: archived".to_owned()));
}

#[test]
fn filter_keeps_matching_status_or_everything() {
    let tasks = vec![task(1, "pending"), task(2, "completed"), task(3, "pending")];
    assert_eq!(filter_tasks(&tasks, "").len(), 3);
    let pending: Vec<_> = filter_tasks(&tasks, "pending").into_iter().map(|t| t.id).collect();
    assert_eq!(pending, vec![Id::Int(1), Id::Int(3)]);
}
