use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, wires dependencies, and starts the HTTP server.
/// - config/: Environment-driven configuration (server, CORS, Groq, frontend, database)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration; a missing GROQ_API_KEY stops here
    let config = AppConfig::from_env().inspect_err(|err| tracing::error!("{err}"))?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
