//! Field-level validation helpers shared by the API handlers.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Check that a required text field is present after scrubbing.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate an email address (RFC-style check from the `validator` crate).
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}
