//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
   __                 __   __
  / /_ ____ _ _____ / /__ / /____ _ ____  ___
 / __// __ `// ___// //_// // __ `// __ \/ _ \
/ /_ / /_/ /(__  )/ ,<  / // /_/ // / / /  __/
\__/ \__,_//____//_/|_|/_/ \__,_//_/ /_/\___/
"#
    );
}

/// Prints server startup information.
pub fn print_startup_info(port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("{}", separator);
}
