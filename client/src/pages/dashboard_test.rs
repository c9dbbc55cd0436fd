use super::*;
use serde_json::json;

#[test]
fn stat_cards_read_known_counts() {
    let cards = stat_cards(&json!({"total_tasks": 12, "my_tasks": 3, "pending_tasks": 5, "completed_tasks": 7}));
    assert_eq!(cards, vec![("Total Tasks", 12), ("My Tasks", 3), ("Pending", 5), ("Completed", 7)]);
}

#[test]
fn missing_or_null_stats_read_as_zero() {
    assert!(stat_cards(&Value::Null).iter().all(|(_, value)| *value == 0));
    assert_eq!(stat_cards(&json!({"pending_tasks": 2}))[2], ("Pending", 2));
}
