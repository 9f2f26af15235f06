//! Virtual Bunny Care server.
//!
//! # Usage
//!
//! ```bash
//! # Listen on 0.0.0.0:8000
//! bunny-server
//!
//! # Custom port, verbose engine logs
//! BUNNY_PORT=8080 RUST_LOG=debug bunny-server
//! ```

use bunny_logic::clock::SystemClock;
use bunny_logic::engine::BunnyEngine;
use bunny_server::{router, ServerConfig, ServerError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    let listener = config.bind().await?;
    let addr = listener.local_addr()?;

    let engine = BunnyEngine::with_config(SystemClock, config.bunny_config());
    tracing::info!(
        "Virtual Bunny Care listening on {} (grace {}s, {}s ticks)",
        addr,
        engine.config().decay_grace_seconds,
        engine.config().tick_seconds
    );
    let app = router(engine);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
