//! Main application router.

use crate::{
    controllers::{auth_controller, health_controller, project_controller, task_controller},
    middleware::{auth_middleware, logging_middleware, AuthMiddlewareState},
    state::AppState,
};
use axum::{http::HeaderValue, middleware, Router};
use std::sync::Arc;
use tasklane_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
///
/// Auth and health routes are public. The auth middleware only records
/// claims; every protected handler enforces them through the
/// `AuthenticatedUser` extractor.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);
    let auth_state = AuthMiddlewareState::new(Arc::clone(&state.token_provider));

    let api_router = Router::new()
        .nest("/auth", auth_controller::router())
        .nest("/projects", project_controller::router())
        .merge(task_controller::router())
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state);

    let router = Router::new()
        .merge(health_controller::router())
        .merge(api_router)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    info!("Router created with REST endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
