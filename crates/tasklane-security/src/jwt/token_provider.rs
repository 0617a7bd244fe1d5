//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tasklane_config::SecurityConfig;
use tasklane_core::{TasklaneError, TasklaneResult};
use tracing::{debug, warn};

/// JWT token provider service.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.validate_exp = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates a signed token for the given email.
    pub fn generate_token(&self, email: &str) -> TasklaneResult<String> {
        let expires_at =
            Utc::now() + Duration::seconds(self.config.jwt_expiration_secs as i64);
        let claims = Claims::new(email, self.config.jwt_issuer.clone(), expires_at);

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TasklaneError::Internal(format!("Failed to generate token: {}", e)))?;

        debug!("Generated token for {}", email);
        Ok(token)
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> TasklaneResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TasklaneError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TasklaneError::InvalidToken("Invalid token signature".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        TasklaneError::InvalidToken("Invalid token issuer".to_string())
                    }
                    _ => TasklaneError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SecurityConfig {
        SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_expiration_secs: 3600,
            jwt_issuer: "test-issuer".to_string(),
            ..Default::default()
        }
    }

    fn create_test_provider() -> TokenProvider {
        TokenProvider::new(Arc::new(test_config()))
    }

    #[test]
    fn test_generate_and_validate_token() {
        let provider = create_test_provider();

        let token = provider.generate_token("user@example.com").unwrap();
        let claims = provider.validate_token(&token).unwrap();

        assert_eq!(claims.email(), "user@example.com");
        assert_eq!(claims.iss, "test-issuer");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let provider = create_test_provider();
        let result = provider.validate_token("invalid-token");
        assert!(matches!(result, Err(TasklaneError::InvalidToken(_))));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let provider = create_test_provider();

        let other_config = SecurityConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            ..test_config()
        };
        let other_provider = TokenProvider::new(Arc::new(other_config));

        let token = other_provider.generate_token("user@example.com").unwrap();
        assert!(provider.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_maps_to_token_expired() {
        let provider = create_test_provider();

        // Encode claims well past the validation leeway with the same secret.
        let expired = Claims::new(
            "user@example.com",
            "test-issuer",
            Utc::now() - Duration::hours(2),
        );
        let token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret("test-secret-key-for-testing-only".as_bytes()),
        )
        .unwrap();

        let result = provider.validate_token(&token);
        assert!(matches!(result, Err(TasklaneError::TokenExpired)));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let provider = create_test_provider();

        let other_config = SecurityConfig {
            jwt_issuer: "someone-else".to_string(),
            ..test_config()
        };
        let other_provider = TokenProvider::new(Arc::new(other_config));

        let token = other_provider.generate_token("user@example.com").unwrap();
        let result = provider.validate_token(&token);
        assert!(matches!(result, Err(TasklaneError::InvalidToken(_))));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let provider = create_test_provider();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("test-issuer"));
        assert!(!debug_str.contains("test-secret-key-for-testing-only"));
    }
}
