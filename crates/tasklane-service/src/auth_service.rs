//! Authentication service: login and registration with token issuance.

use crate::dto::{LoginRequest, RegisterRequest, TokenResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use std::sync::Arc;
use tasklane_config::SecurityConfig;
use tasklane_core::{TasklaneError, TasklaneResult, ValidateExt};
use tasklane_security::TokenProvider;
use tracing::{debug, info, warn};

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in a user and issues a token.
    async fn login(&self, request: LoginRequest) -> TasklaneResult<TokenResponse>;

    /// Registers a new user and issues a token.
    async fn register(&self, request: RegisterRequest) -> TasklaneResult<TokenResponse>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl<U: UserService> {
    user_service: Arc<U>,
    token_provider: Arc<TokenProvider>,
}

impl<U: UserService> AuthServiceImpl<U> {
    /// Creates a new authentication service.
    pub fn new(user_service: Arc<U>, security_config: Arc<SecurityConfig>) -> Self {
        let token_provider = Arc::new(TokenProvider::new(security_config));
        Self {
            user_service,
            token_provider,
        }
    }
}

#[async_trait]
impl<U: UserService + 'static> AuthService for AuthServiceImpl<U> {
    async fn login(&self, request: LoginRequest) -> TasklaneResult<TokenResponse> {
        debug!("Login attempt for: {}", request.email);

        request.validate_request()?;

        // Unknown email and wrong password fail identically so a caller
        // cannot probe which emails are registered.
        let user = self
            .user_service
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email - {}", request.email);
                TasklaneError::InvalidCredentials
            })?;

        if !self
            .user_service
            .verify_password(&request.password, &user.password_hash)?
        {
            warn!("Login failed: invalid password - {}", user.id);
            return Err(TasklaneError::InvalidCredentials);
        }

        let token = self.token_provider.generate_token(user.email.as_str())?;

        info!("User logged in: {}", user.id);
        Ok(TokenResponse::new(token, user.email.as_str()))
    }

    async fn register(&self, request: RegisterRequest) -> TasklaneResult<TokenResponse> {
        debug!("Registering user: {}", request.email);

        let user = self.user_service.register_user(request).await?;
        let token = self.token_provider.generate_token(user.email.as_str())?;

        info!("User registered: {}", user.id);
        Ok(TokenResponse::new(token, user.email.as_str()))
    }
}

impl<U: UserService> std::fmt::Debug for AuthServiceImpl<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tasklane_core::{Email, User};
    use tasklane_security::PasswordHasher;

    /// Mock user service backed by a map keyed on email.
    struct MockUserService {
        users: Mutex<HashMap<String, User>>,
        hasher: PasswordHasher,
    }

    impl MockUserService {
        fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
                hasher: PasswordHasher::new(),
            }
        }

        fn with_user(email: &str, password: &str) -> Self {
            let service = Self::new();
            let user = User::new(
                Email::new_unchecked(email.to_string()),
                service.hasher.hash(password).unwrap(),
                "Test".to_string(),
                "User".to_string(),
            );
            service
                .users
                .lock()
                .unwrap()
                .insert(email.to_string(), user);
            service
        }
    }

    #[async_trait]
    impl UserService for MockUserService {
        async fn find_by_email(&self, email: &str) -> TasklaneResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(email).cloned())
        }

        async fn register_user(&self, request: RegisterRequest) -> TasklaneResult<User> {
            request.validate_request()?;

            let mut users = self.users.lock().unwrap();
            if users.contains_key(&request.email) {
                return Err(TasklaneError::Conflict(format!(
                    "User with email {} already exists",
                    request.email
                )));
            }

            let user = User::new(
                Email::new_unchecked(request.email.clone()),
                self.hasher.hash(&request.password)?,
                request.first_name,
                request.last_name,
            );
            users.insert(request.email, user.clone());
            Ok(user)
        }

        fn verify_password(&self, raw: &str, hash: &str) -> TasklaneResult<bool> {
            self.hasher.verify(raw, hash)
        }

        async fn email_exists(&self, email: &str) -> TasklaneResult<bool> {
            Ok(self.users.lock().unwrap().contains_key(email))
        }
    }

    fn create_test_config() -> Arc<SecurityConfig> {
        Arc::new(SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_expiration_secs: 3600,
            jwt_issuer: "test-issuer".to_string(),
            ..Default::default()
        })
    }

    fn create_auth_service(users: MockUserService) -> AuthServiceImpl<MockUserService> {
        AuthServiceImpl::new(Arc::new(users), create_test_config())
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = create_auth_service(MockUserService::with_user(
            "test@example.com",
            "secret123",
        ));

        let request = LoginRequest {
            email: "test@example.com".to_string(),
            password: "secret123".to_string(),
        };

        let response = service.login(request).await.unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_login_issues_validatable_token() {
        let service = create_auth_service(MockUserService::with_user(
            "test@example.com",
            "secret123",
        ));

        let request = LoginRequest {
            email: "test@example.com".to_string(),
            password: "secret123".to_string(),
        };
        let response = service.login(request).await.unwrap();

        let provider = TokenProvider::new(create_test_config());
        let claims = provider.validate_token(&response.token).unwrap();
        assert_eq!(claims.email(), "test@example.com");
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let service = create_auth_service(MockUserService::new());

        let request = LoginRequest {
            email: "ghost@example.com".to_string(),
            password: "secret123".to_string(),
        };

        let result = service.login(request).await;
        assert!(matches!(result, Err(TasklaneError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = create_auth_service(MockUserService::with_user(
            "test@example.com",
            "secret123",
        ));

        let request = LoginRequest {
            email: "test@example.com".to_string(),
            password: "wrong-password".to_string(),
        };

        let result = service.login(request).await;
        assert!(matches!(result, Err(TasklaneError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_failure_does_not_reveal_cause() {
        let service = create_auth_service(MockUserService::with_user(
            "test@example.com",
            "secret123",
        ));

        let unknown = service
            .login(LoginRequest {
                email: "ghost@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await
            .unwrap_err();
        let wrong = service
            .login(LoginRequest {
                email: "test@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_register_success() {
        let service = create_auth_service(MockUserService::new());

        let request = RegisterRequest {
            email: "new@example.com".to_string(),
            password: "secret123".to_string(),
            first_name: "New".to_string(),
            last_name: "User".to_string(),
        };

        let response = service.register(request).await.unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = create_auth_service(MockUserService::new());

        let register = RegisterRequest {
            email: "new@example.com".to_string(),
            password: "secret123".to_string(),
            first_name: "New".to_string(),
            last_name: "User".to_string(),
        };
        service.register(register).await.unwrap();

        let login = LoginRequest {
            email: "new@example.com".to_string(),
            password: "secret123".to_string(),
        };
        let response = service.login(login).await.unwrap();
        assert_eq!(response.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_auth_service(MockUserService::with_user(
            "test@example.com",
            "secret123",
        ));

        let request = RegisterRequest {
            email: "test@example.com".to_string(),
            password: "other-password".to_string(),
            first_name: "Dup".to_string(),
            last_name: "User".to_string(),
        };

        let result = service.register(request).await;
        match result.unwrap_err() {
            TasklaneError::Conflict(msg) => {
                assert!(msg.contains("test@example.com"));
            }
            other => panic!("Expected Conflict error, got {:?}", other),
        }
    }
}
