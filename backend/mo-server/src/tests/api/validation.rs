use crate::ApiError;
use crate::api::validation::{
    MAX_EMAIL_LENGTH, MAX_PASSWORD_LENGTH, validate_email, validate_password, validate_required,
};

fn field_of(result: Result<(), ApiError>) -> Option<String> {
    match result {
        Err(ApiError::Validation { field, .. }) => field,
        _ => None,
    }
}

#[test]
fn test_plain_email_is_accepted() {
    assert!(validate_email("a@b.com").is_ok());
}

#[test]
fn test_empty_email_is_rejected() {
    assert_eq!(field_of(validate_email("")), Some("email".to_string()));
    assert_eq!(field_of(validate_email("   ")), Some("email".to_string()));
}

#[test]
fn test_email_without_at_sign_is_rejected() {
    assert_eq!(field_of(validate_email("ab.com")), Some("email".to_string()));
}

#[test]
fn test_email_length_boundary() {
    let local = "a".repeat(MAX_EMAIL_LENGTH - "@b.com".len());
    let at_limit = format!("{}@b.com", local);
    let over_limit = format!("a{}", at_limit);

    assert!(validate_email(&at_limit).is_ok());
    assert_eq!(field_of(validate_email(&over_limit)), Some("email".to_string()));
}

#[test]
fn test_empty_password_is_rejected() {
    assert_eq!(field_of(validate_password("")), Some("password".to_string()));
}

#[test]
fn test_password_length_boundary() {
    let at_limit = "p".repeat(MAX_PASSWORD_LENGTH);
    let over_limit = "p".repeat(MAX_PASSWORD_LENGTH + 1);

    assert!(validate_password(&at_limit).is_ok());
    assert_eq!(
        field_of(validate_password(&over_limit)),
        Some("password".to_string())
    );
}

#[test]
fn test_blank_required_value_names_field() {
    assert_eq!(
        field_of(validate_required(" ", "userId")),
        Some("userId".to_string())
    );
    assert!(validate_required("user-1", "userId").is_ok());
}
