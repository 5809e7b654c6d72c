use std::sync::Arc;

use dotenvy::dotenv;
use persistence::connection::ConnectionManager;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, wires dependencies, serves HTTP until a shutdown
/// signal, then closes the database pool.
///
/// Layout:
/// - config/: environment-derived settings (runtime profile, server, CORS, database)
/// - setup/: dependency injection, server assembly, shutdown signal
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = AppConfig::from_env();

    // 3. Initialize tracing with RUST_LOG env filter, defaulting by environment
    let default_level = match &config {
        Ok(config) if !config.runtime.environment().is_production() => "debug",
        _ => "info",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = config.inspect_err(|err| tracing::error!(error = %err, "Invalid configuration"))?;
    if config.auth_enabled {
        tracing::warn!("AUTH_ENABLED is set but no route enforces authentication");
    }

    // 4. Initialize database
    let connections = Arc::new(ConnectionManager::new());
    database_config::init_database(&connections, config.database.as_ref())?;

    // 5. Wire dependencies
    let container =
        DependencyContainer::new(connections.clone(), config.runtime.environment());

    // 6. Run server until a shutdown signal arrives
    let served = Server::run(&config, container).await;
    if let Err(err) = &served {
        tracing::error!(error = %err, "Server failed");
    }

    // 7. Release the pool
    match connections.shutdown().await {
        Ok(()) => tracing::info!("Database pool closed"),
        Err(err) => {
            tracing::error!(error = %err, "Failed to close database pool");
            served?;
            return Err(err.into());
        }
    }

    served
}
