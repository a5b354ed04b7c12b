//! # Ecom Catalog Server
//!
//! Main entry point for the product catalog application. Runs the REST
//! API, backed by MySQL and an in-process cache, in a single process.

use ecom_config::ConfigLoader;
use ecom_core::{EcomError, EcomResult};
use ecom_repository::{create_pool, DatabasePoolInterface};
use ecom_rest::create_router;
use tokio::signal;
use tracing::{error, info};

mod di;
mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    startup::print_banner();
    info!("Starting Ecom Catalog Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> EcomResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    // Create database pool and run migrations
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Build DI module - centralized dependency injection
    let module = di::build_app_module(&db_pool, &config.cache);

    // Create REST router
    let router = create_router(module.as_ref(), &config.server);

    // Start REST server
    let rest_addr = config.server.rest_addr();
    info!("Starting REST server on http://{}", rest_addr);
    startup::print_startup_info(config.server.rest_port);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| EcomError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| EcomError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ecom=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
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
