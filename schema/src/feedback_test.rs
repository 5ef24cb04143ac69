use super::*;

#[test]
fn suggestion_is_trimmed() {
    let req = SuggestionRequest::new("  more vegan recipes please \n").expect("valid");
    assert_eq!(req.suggestion, "more vegan recipes please");
}

#[test]
fn blank_suggestion_is_rejected() {
    assert_eq!(
        SuggestionRequest::new("   "),
        Err(ApiError::Validation("suggestion must not be empty".to_owned()))
    );
}

#[test]
fn oversized_suggestion_is_rejected() {
    let text = "a".repeat(MAX_SUGGESTION_CHARS + 1);
    assert!(SuggestionRequest::new(&text).is_err());
    assert!(SuggestionRequest::new(&"a".repeat(MAX_SUGGESTION_CHARS)).is_ok());
}

#[test]
fn admin_users_decode_with_missing_goal() {
    let raw = br#"{"users":[
        {"_id":"u1","name":"Asha","email":"a@b.com","goal":"cutting","created_at":"2025-01-07T10:00:00.123456"},
        {"_id":"u2","name":"Ravi","email":"r@b.com"}
    ]}"#;
    let resp: AdminUsersResponse = crate::decode_json(raw).expect("decode");
    assert_eq!(resp.users.len(), 2);
    assert_eq!(resp.users[0].goal.as_deref(), Some("cutting"));
    assert_eq!(resp.users[1].goal, None);
    assert_eq!(resp.users[1].created_at, None);
}

#[test]
fn admin_suggestions_decode() {
    let raw = br#"{"suggestions":[{"_id":"s1","user_id":"u1","suggestion":"dark mode","created_at":"2025-01-08T09:30:00"}]}"#;
    let resp: AdminSuggestionsResponse = crate::decode_json(raw).expect("decode");
    assert_eq!(resp.suggestions[0].suggestion, "dark mode");
    assert_eq!(resp.suggestions[0].user_id, "u1");
}

#[test]
fn admin_listing_without_array_is_validation_error() {
    let err = crate::decode_json::<AdminUsersResponse>(br#"{"error":"nope"}"#).expect_err("shape");
    assert!(matches!(err, ApiError::Validation(_)));
}

#[test]
fn display_date_handles_backend_formats() {
    assert_eq!(display_date(Some("2025-01-07T10:00:00.123456")), "2025-01-07");
    assert_eq!(display_date(Some("2025-01-07T10:00:00Z")), "2025-01-07");
    assert_eq!(display_date(Some("yesterday")), "yesterday");
    assert_eq!(display_date(None), "—");
    assert_eq!(display_date(Some("  ")), "—");
}
