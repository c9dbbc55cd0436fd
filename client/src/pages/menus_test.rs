use super::*;

fn menu(id: i64, name: &str, order: Option<i64>) -> MenuRecord {
    serde_json::from_value(json!({"id": id, "name": name, "order": order})).unwrap()
}

#[test]
fn sorted_by_order_then_name() {
    let menus = vec![menu(1, "Users", Some(2)), menu(2, "Zeta", None), menu(3, "Tasks", Some(1)), menu(4, "Alpha", None)];
    let names: Vec<_> = sorted_menus(&menus).into_iter().map(|m| m.name).collect();
    assert_eq!(names, ["Tasks", "Users", "Alpha", "Zeta"]);
}

#[test]
fn move_up_swaps_with_previous_and_renumbers() {
    let menus = vec![menu(10, "A", Some(1)), menu(20, "B", Some(2)), menu(30, "C", Some(3))];
    let payload = move_up_payload(&menus, 2).unwrap();
    assert_eq!(
        payload,
        json!({"menus": [{"id": 10, "order": 1}, {"id": 30, "order": 2}, {"id": 20, "order": 3}]})
    );
}

#[test]
fn move_up_out_of_range_is_none() {
    let menus = vec![menu(10, "A", Some(1))];
    assert_eq!(move_up_payload(&menus, 0), None);
    assert_eq!(move_up_payload(&menus, 5), None);
}
