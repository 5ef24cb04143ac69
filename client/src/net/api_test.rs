use super::*;

#[test]
fn check_status_passes_success_bodies_through() {
    assert_eq!(check_status(200, b"{}".to_vec()), Ok(b"{}".to_vec()));
    assert_eq!(check_status(201, b"{\"message\":\"ok\"}".to_vec()).map(|b| b.len()), Ok(16));
}

#[test]
fn check_status_maps_forbidden_to_access_denied() {
    let err = check_status(403, br#"{"error":"Forbidden: Admin access required"}"#.to_vec()).expect_err("403");
    assert!(err.is_access_denied());
}

#[test]
fn check_status_maps_unauthorized() {
    let err = check_status(401, br#"{"error":"Unauthorized: No token provided"}"#.to_vec()).expect_err("401");
    assert_eq!(err, ApiError::Unauthorized("Unauthorized: No token provided".to_owned()));
}

#[test]
fn check_status_keeps_server_message_for_other_failures() {
    let err = check_status(400, br#"{"error":"Missing required fields"}"#.to_vec()).expect_err("400");
    assert_eq!(err.user_message(), "Missing required fields");
}

#[test]
fn redirect_statuses_are_failures() {
    assert!(check_status(302, Vec::new()).is_err());
}
