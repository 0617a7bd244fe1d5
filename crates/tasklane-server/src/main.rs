//! # Tasklane Server
//!
//! Main entry point for the Tasklane application: loads configuration,
//! wires repositories and services, and serves the REST API.

use std::sync::Arc;
use tasklane_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use tasklane_core::{TasklaneError, TasklaneResult};
use tasklane_repository::{create_pool, PgProjectRepository, PgTaskRepository, PgUserRepository};
use tasklane_rest::{create_router, AppState};
use tasklane_security::{PasswordHasher, TokenProvider};
use tasklane_service::{
    AuthService, AuthServiceImpl, ProjectService, ProjectServiceImpl, TaskService, TaskServiceImpl,
    UserServiceImpl,
};
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    // Logging is configured from the loaded config, so a load failure can
    // only be reported on stderr.
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);

    startup::print_banner();
    info!("Starting Tasklane server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> TasklaneResult<()> {
    let db_pool = create_pool(&config.database).await?;
    db_pool.health_check().await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
        info!("Database migrations applied");
    }

    let security_config = Arc::new(config.security.clone());
    let password_hasher = Arc::new(PasswordHasher::with_cost(
        config.security.password_hash_cost,
    )?);
    let token_provider = Arc::new(TokenProvider::new(Arc::clone(&security_config)));

    let user_repository = Arc::new(PgUserRepository::new(Arc::clone(&db_pool)));
    let project_repository = Arc::new(PgProjectRepository::new(Arc::clone(&db_pool)));
    let task_repository = Arc::new(PgTaskRepository::new(Arc::clone(&db_pool)));

    let user_service = Arc::new(UserServiceImpl::new(
        Arc::clone(&user_repository),
        Arc::clone(&password_hasher),
    ));
    let auth_service: Arc<dyn AuthService> = Arc::new(AuthServiceImpl::new(
        user_service,
        Arc::clone(&security_config),
    ));
    let project_service: Arc<dyn ProjectService> = Arc::new(ProjectServiceImpl::new(
        user_repository,
        project_repository,
        Arc::clone(&task_repository),
    ));
    let task_service: Arc<dyn TaskService> = Arc::new(TaskServiceImpl::new(
        task_repository,
        Arc::clone(&project_service),
    ));

    let app_state = AppState::new(auth_service, project_service, task_service, token_provider);
    let router = create_router(app_state, &config.server);

    let addr = config.server.addr();
    startup::print_startup_info(config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| TasklaneError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TasklaneError::internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
