//! Validation utilities.

use crate::{FieldError, TasklaneError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `TasklaneError` on failure.
    fn validate_request(&self) -> Result<(), TasklaneError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `TasklaneError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> TasklaneError {
    let field_errors = collect_field_errors(&errors);

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    TasklaneError::Validation(message)
}

/// Flattens `ValidationErrors` into per-field errors for API responses.
#[must_use]
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect()
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
        #[validate(email(message = "not an email"))]
        email: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_validate_request_ok() {
        let sample = Sample {
            name: "valid".to_string(),
            email: "a@example.com".to_string(),
        };
        assert!(sample.validate_request().is_ok());
    }

    #[test]
    fn test_validate_request_collects_messages() {
        let sample = Sample {
            name: "ab".to_string(),
            email: "nope".to_string(),
        };
        let err = sample.validate_request().unwrap_err();
        match err {
            TasklaneError::Validation(message) => {
                assert!(message.contains("too short"));
                assert!(message.contains("not an email"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_collect_field_errors() {
        let sample = Sample {
            name: "ab".to_string(),
            email: "nope".to_string(),
        };
        let errors = sample.validate().unwrap_err();
        let fields = collect_field_errors(&errors);
        assert_eq!(fields.len(), 2);
        assert!(fields.iter().any(|f| f.field == "name"));
        assert!(fields.iter().any(|f| f.field == "email"));
    }
}
