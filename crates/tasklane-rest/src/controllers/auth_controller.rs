//! Authentication controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tasklane_service::{LoginRequest, RegisterRequest, TokenResponse};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user and issue a token.
async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TokenResponse>>), AppError> {
    debug!("Registration request for: {}", request.email);

    let response = state.auth_service.register(request).await?;
    Ok(created(response))
}

/// Login with email and password.
async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<TokenResponse> {
    debug!("Login request for: {}", request.email);

    let response = state.auth_service.login(request).await?;
    ok(response)
}
