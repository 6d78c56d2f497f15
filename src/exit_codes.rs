//! Exit code constants for the scaffold CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid workspace files)
//! - 2: Not found (app, task or template lookup failed)
//! - 3: Validation failure (required field missing, strict lint)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid catalog/config, empty template input.
pub const USER_ERROR: i32 = 1;

/// A referenced app, task or template does not exist.
pub const NOT_FOUND: i32 = 2;

/// Validation failure: required field missing or strict lint warnings.
pub const VALIDATION_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, NOT_FOUND, VALIDATION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
