//! FlowTrack HTTP Server Binary
//!
//! Entry point for the FlowTrack REST API. Loads configuration, builds the
//! repository, sets up the router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository (default)
//! cargo run --bin flowtrack-server
//!
//! # Use an explicit config file and port
//! FLOWTRACK_CONFIG=./flowtrack.toml PORT=8080 cargo run --bin flowtrack-server
//! ```
//!
//! # Environment Variables
//!
//! - `FLOWTRACK_CONFIG`: Path to a `flowtrack.toml` file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `REPOSITORY_TYPE`: Repository backend (default: local)
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flowtrack::config::AppConfig;
use flowtrack::db::RepositoryFactory;
use flowtrack::http::{create_router_with_limit, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting FlowTrack HTTP Server");

    let config = AppConfig::load()?;
    let repository_type = config.repository_type()?;
    let repository = RepositoryFactory::create(repository_type)?;
    info!("Repository initialized successfully ({})", repository_type);

    let state = AppState::new(repository, repository_type);
    let app = create_router_with_limit(state, config.server.body_limit_bytes);

    let addr = config.bind_address()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
