//! User service implementation.

use crate::dto::RegisterRequest;
use crate::user_service::UserService;
use async_trait::async_trait;
use std::sync::Arc;
use tasklane_core::{Email, TasklaneError, TasklaneResult, User, ValidateExt};
use tasklane_repository::UserRepository;
use tasklane_security::PasswordHasher;
use tracing::{debug, info};

/// Generic user service implementation.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
    password_hasher: Arc<PasswordHasher>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn find_by_email(&self, email: &str) -> TasklaneResult<Option<User>> {
        self.user_repository.find_by_email(email).await
    }

    async fn register_user(&self, request: RegisterRequest) -> TasklaneResult<User> {
        debug!("Registering user: {}", request.email);

        request.validate_request()?;

        // The duplicate check happens before any row is written.
        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(TasklaneError::Conflict(format!(
                "User with email {} already exists",
                request.email
            )));
        }

        let email =
            Email::new(&request.email).map_err(|e| TasklaneError::Validation(e.to_string()))?;

        let password_hash = self.password_hasher.hash(&request.password)?;

        let user = User::new(email, password_hash, request.first_name, request.last_name);

        let saved_user = self.user_repository.save(&user).await?;

        info!("User registered: {}", saved_user.id);
        Ok(saved_user)
    }

    fn verify_password(&self, raw: &str, hash: &str) -> TasklaneResult<bool> {
        self.password_hasher.verify(raw, hash)
    }

    async fn email_exists(&self, email: &str) -> TasklaneResult<bool> {
        self.user_repository.exists_by_email(email).await
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
