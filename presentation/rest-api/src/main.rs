use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, OpenAI)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from .env
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    logger::subscriber::init("info");

    // 3. Load configuration
    let config = AppConfig::from_env();
    if config.openai.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set, completion requests will fail");
    }

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.openai);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
