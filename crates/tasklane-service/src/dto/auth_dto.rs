//! Authentication-related DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 64, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name is required"))]
    pub last_name: String,
}

/// Token response returned by login and register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub email: String,
}

impl TokenResponse {
    #[must_use]
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_valid() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_login_request_empty_email() {
        let request = LoginRequest {
            email: "".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_empty_password() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: "".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            email: "new@example.com".to_string(),
            password: "secret123".to_string(),
            first_name: "New".to_string(),
            last_name: "User".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_invalid_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
            first_name: "New".to_string(),
            last_name: "User".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_password_too_short() {
        let request = RegisterRequest {
            email: "new@example.com".to_string(),
            password: "short".to_string(),
            first_name: "New".to_string(),
            last_name: "User".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_missing_names() {
        let request = RegisterRequest {
            email: "new@example.com".to_string(),
            password: "secret123".to_string(),
            first_name: "".to_string(),
            last_name: "".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_uses_camel_case_keys() {
        let json = r#"{
            "email": "new@example.com",
            "password": "secret123",
            "firstName": "New",
            "lastName": "User"
        }"#;

        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name, "New");
        assert_eq!(request.last_name, "User");
    }

    #[test]
    fn test_token_response() {
        let response = TokenResponse::new("jwt-token", "user@example.com");

        assert_eq!(response.token, "jwt-token");
        assert_eq!(response.email, "user@example.com");
    }
}
