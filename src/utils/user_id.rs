//! User identifier generation and shape validation.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// 8-4-4-4-12 hexadecimal groups, any case, anchored at both ends.
static USER_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("user id pattern is valid")
});

/// Generates a fresh identifier for a new user (random v4 UUID, lowercase).
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns true if `user_id` has the UUID shape.
///
/// Only the shape is checked; version and variant bits are not.
pub fn is_valid_user_id(user_id: &str) -> bool {
    USER_ID_REGEX.is_match(user_id)
}

/// Validates a path-supplied user identifier.
///
/// # Errors
///
/// Returns [`AppError::InvalidUserId`] if the shape check fails.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_user_id("4b3a1c2e-8f9d-4e5a-b6c7-d8e9f0a1b2c3").is_ok());
/// assert!(validate_user_id("12345").is_err());
/// ```
pub fn validate_user_id(user_id: &str) -> Result<(), AppError> {
    if is_valid_user_id(user_id) {
        Ok(())
    } else {
        Err(AppError::InvalidUserId)
    }
}
