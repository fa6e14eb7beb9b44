//! Request payload checks run before any storage access

use crate::{ApiError, ApiResult};

pub const MAX_EMAIL_LENGTH: usize = 320;
pub const MAX_PASSWORD_LENGTH: usize = 1024;

pub fn validate_email(email: &str) -> ApiResult<()> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Email is required", "email"));
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(ApiError::validation(
            format!("Email must be at most {} characters", MAX_EMAIL_LENGTH),
            "email",
        ));
    }

    if !email.contains('@') {
        return Err(ApiError::validation("Email must contain '@'", "email"));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> ApiResult<()> {
    if password.is_empty() {
        return Err(ApiError::validation("Password is required", "password"));
    }

    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(ApiError::validation(
            format!("Password must be at most {} characters", MAX_PASSWORD_LENGTH),
            "password",
        ));
    }

    Ok(())
}

pub fn validate_required(value: &str, field: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} is required", field), field));
    }

    Ok(())
}
