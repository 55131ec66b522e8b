//! Guildhall API server entry point.

use std::error::Error;

use guildhall_api::config::ServerConfig;
use guildhall_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Guildhall API server");

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    // State lives only for the lifetime of the process.
    let app = guildhall_api::app(AppState::in_memory());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
