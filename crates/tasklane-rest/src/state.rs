//! Application state for Axum handlers.

use std::sync::Arc;
use tasklane_security::TokenProvider;
use tasklane_service::{AuthService, ProjectService, TaskService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub project_service: Arc<dyn ProjectService>,
    pub task_service: Arc<dyn TaskService>,
    pub token_provider: Arc<TokenProvider>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        project_service: Arc<dyn ProjectService>,
        task_service: Arc<dyn TaskService>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        Self {
            auth_service,
            project_service,
            task_service,
            token_provider,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
