//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use tasklane_core::{TasklaneError, TasklaneResult};
use tracing::debug;

/// Loads application configuration from layered sources.
///
/// Sources are applied in order, later ones overriding earlier ones:
/// 1. `config/default.toml` - default values
/// 2. `config/{environment}.toml` - environment-specific overrides
/// 3. `config/local.toml` - local overrides (not committed)
/// 4. Environment variables with `TASKLANE_` prefix and `__` separators
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the default location (`./config`).
    pub fn load() -> TasklaneResult<AppConfig> {
        Self::load_from("./config")
    }

    /// Loads configuration from the specified directory.
    pub fn load_from(config_dir: impl AsRef<Path>) -> TasklaneResult<AppConfig> {
        let config_dir = config_dir.as_ref();

        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("TASKLANE_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        debug!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = config_dir.join("default.toml");
        if default_path.exists() {
            builder = builder
                .add_source(File::with_name(&default_path.to_string_lossy()).required(false));
        }

        let env_path = config_dir.join(format!("{environment}.toml"));
        if env_path.exists() {
            builder =
                builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
        }

        let local_path = config_dir.join("local.toml");
        if local_path.exists() {
            builder =
                builder.add_source(File::with_name(&local_path.to_string_lossy()).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("TASKLANE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error)?;

        let mut app_config: AppConfig = config.try_deserialize().map_err(config_error)?;
        app_config.app.environment = environment;

        app_config.validate()?;

        Ok(app_config)
    }
}

fn config_error(err: ConfigError) -> TasklaneError {
    TasklaneError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_missing_directory_uses_defaults() {
        // No files and no TASKLANE_ variables set in the test environment,
        // so the loader falls back to serde defaults.
        let config = ConfigLoader::load_from("./does-not-exist").unwrap();
        assert_eq!(config.app.name, "tasklane");
        assert_eq!(config.server.port, 8080);
    }
}
