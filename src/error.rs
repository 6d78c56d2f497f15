//! Error types for the scaffold CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The prompt composer itself never fails; these errors come from the layers
//! around it (argument handling, catalog lookups, file I/O).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for scaffold operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// User provided invalid arguments or a workspace file is invalid.
    #[error("{0}")]
    UserError(String),

    /// A referenced app, task or template does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Template input was missing or empty.
    #[error("Invalid input: {0}")]
    InputError(String),

    /// Generation preconditions failed (required fields, strict lint).
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl ScaffoldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UserError(_) => exit_codes::USER_ERROR,
            ScaffoldError::NotFound(_) => exit_codes::NOT_FOUND,
            ScaffoldError::InputError(_) => exit_codes::USER_ERROR,
            ScaffoldError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = ScaffoldError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn not_found_has_correct_exit_code() {
        let err = ScaffoldError::NotFound("Task not found in this app".to_string());
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn input_error_is_a_user_error() {
        let err = ScaffoldError::InputError("template must be non-empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = ScaffoldError::ValidationError("Required field missing: Name".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ScaffoldError::NotFound("App not found".to_string());
        assert_eq!(err.to_string(), "App not found");

        let err = ScaffoldError::InputError("template is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: template is empty");

        let err = ScaffoldError::ValidationError("Required field missing: Tone".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: Required field missing: Tone"
        );
    }
}
