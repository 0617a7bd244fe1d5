//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims structure.
///
/// The subject is the user's email address; that email is the caller
/// identity every downstream ownership check runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email).
    pub sub: String,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issuer.
    pub iss: String,
}

impl Claims {
    /// Creates new claims for the given email.
    #[must_use]
    pub fn new(email: impl Into<String>, issuer: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: email.into(),
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer.into(),
        }
    }

    /// Returns the authenticated email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
