//! User service trait definition.

use crate::dto::RegisterRequest;
use async_trait::async_trait;
use tasklane_core::{TasklaneResult, User};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> TasklaneResult<Option<User>>;

    /// Registers a new user.
    ///
    /// The password is hashed exactly once, here; `save` never re-encodes.
    async fn register_user(&self, request: RegisterRequest) -> TasklaneResult<User>;

    /// Verifies a raw password against a stored hash.
    fn verify_password(&self, raw: &str, hash: &str) -> TasklaneResult<bool>;

    /// Checks if an email is already registered.
    async fn email_exists(&self, email: &str) -> TasklaneResult<bool>;
}
