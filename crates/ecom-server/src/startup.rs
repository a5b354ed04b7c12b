//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ______                       ______      __        __
   / ____/________  ____ ___    / ____/___ _/ /_____ _/ /___  ____ _
  / __/ / ___/ __ \/ __ `__ \  / /   / __ `/ __/ __ `/ / __ \/ __ `/
 / /___/ /__/ /_/ / / / / / / / /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
/_____/\___/\____/_/ /_/ /_/  \____/\__,_/\__/\__,_/_/\____/\__, /
                                                           /____/
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(rest_port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:    http://0.0.0.0:{}/api/v1", rest_port);
    info!("Health:      http://0.0.0.0:{}/health", rest_port);
    info!("Swagger UI:  http://0.0.0.0:{}/swagger-ui", rest_port);
    info!("{}", separator);
}
