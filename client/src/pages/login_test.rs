use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com ", "secret1"),
        Ok(("user@example.com".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("a@b.com", " pw "), Ok(("a@b.com".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret1"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your email and password."));
}
