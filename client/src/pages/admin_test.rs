use super::*;

#[test]
fn user_cells_format_goal_and_date() {
    let user = AdminUser {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        goal: Some("bulking".to_owned()),
        created_at: Some("2024-03-05T10:20:30.123456".to_owned()),
    };
    assert_eq!(user_cells(&user), ["Asha", "asha@example.com", "bulking", "2024-03-05"].map(str::to_owned));
}

#[test]
fn user_cells_use_dash_for_missing_values() {
    let user = AdminUser {
        id: "u2".to_owned(),
        name: "Ravi".to_owned(),
        email: "ravi@example.com".to_owned(),
        goal: Some("  ".to_owned()),
        created_at: None,
    };
    let cells = user_cells(&user);
    assert_eq!(cells[2], "—");
    assert_eq!(cells[3], "—");
}

#[test]
fn suggestion_cells_keep_text_verbatim() {
    let entry = Suggestion {
        id: "s1".to_owned(),
        user_id: "u1".to_owned(),
        suggestion: "More vegetarian options".to_owned(),
        created_at: Some("2024-03-05T10:20:30".to_owned()),
    };
    assert_eq!(suggestion_cells(&entry), ["u1", "More vegetarian options", "2024-03-05"].map(str::to_owned));
}
