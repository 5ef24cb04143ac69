use super::*;

fn user(id: &str) -> AdminUser {
    AdminUser {
        id: id.to_owned(),
        name: "Asha".to_owned(),
        email: "a@b.com".to_owned(),
        goal: Some("cutting".to_owned()),
        created_at: None,
    }
}

fn suggestion(text: &str) -> Suggestion {
    Suggestion { id: "s1".to_owned(), user_id: "u1".to_owned(), suggestion: text.to_owned(), created_at: None }
}

fn forbidden() -> ApiError {
    ApiError::Forbidden("Forbidden: Admin access required".to_owned())
}

#[test]
fn both_lists_render_on_success() {
    let mut state = AdminState::default();
    let toast = state.resolve(Ok(vec![user("u1"), user("u2")]), Ok(vec![suggestion("dark mode")]));
    assert_eq!(toast, None);
    assert!(!state.loading);
    assert!(!state.denied);
    assert_eq!(state.users.len(), 2);
    assert_eq!(state.suggestions.len(), 1);
}

#[test]
fn forbidden_on_both_yields_one_toast_and_no_lists() {
    let mut state = AdminState::default();
    let toast = state.resolve(Err(forbidden()), Err(forbidden()));
    assert_eq!(toast.as_deref(), Some("Access denied."));
    assert!(state.denied);
    assert!(state.users.is_empty());
    assert!(state.suggestions.is_empty());
}

#[test]
fn forbidden_on_one_side_drops_the_other_list() {
    let mut state = AdminState::default();
    let toast = state.resolve(Ok(vec![user("u1")]), Err(forbidden()));
    assert_eq!(toast.as_deref(), Some("Access denied."));
    assert!(state.denied);
    assert!(state.users.is_empty());
}

#[test]
fn forbidden_wins_over_other_failure() {
    let mut state = AdminState::default();
    let toast = state.resolve(Err(ApiError::Transport("reset".to_owned())), Err(forbidden()));
    assert_eq!(toast.as_deref(), Some("Access denied."));
    assert!(state.denied);
    assert_eq!(state.error, None);
}

#[test]
fn other_failure_shows_error_panel() {
    let mut state = AdminState::default();
    let toast = state.resolve(
        Err(ApiError::Status { status: 500, message: "db down".to_owned() }),
        Ok(vec![suggestion("x")]),
    );
    assert_eq!(toast.as_deref(), Some("db down"));
    assert!(!state.denied);
    assert_eq!(state.error.as_deref(), Some("db down"));
    assert!(state.suggestions.is_empty());
}
