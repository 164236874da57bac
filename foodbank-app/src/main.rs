//! # Foodbank Backend
//!
//! Binary that wires together all the components:
//! - Load `.env` and configuration from environment
//! - Create the database connection pool
//! - Build the HTTP application with its CORS policy
//! - Start the HTTP server

mod config;
mod telemetry;

use foodbank_db::build_database;
use foodbank_hex::HttpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_dir = std::env::current_dir()?;

    // Load environment variables
    let dotenv = config::load_dotenv(&base_dir)?;

    // Initialize tracing subscriber
    let telemetry = telemetry::init()?;

    if let Some(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    // Load configuration
    let config = config::from_env(&base_dir)?;

    tracing::info!("Starting foodbank server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url.redacted());
    tracing::info!("Environment: {:?}", config.cors.environment);

    // Create the connection pool
    let database = build_database(&config.database_url, &config.pool).await?;

    // Create and run the HTTP server
    let server = HttpServer::new(database, config.cors);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    Ok(())
}
