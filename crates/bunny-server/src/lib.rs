//! HTTP API for the virtual bunny.
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | GET | `/api/status` | |
//! | POST | `/api/feed` | `{"kind": "carrot" \| "pellet", "pelletCount"?: int}` |
//! | POST | `/api/play` | `{"kind": "pat" \| "toy"}` |
//! | POST | `/api/clean` | |
//! | POST | `/api/reset` | |
//!
//! Every route answers with HTTP 200. Invalid action kinds come back as
//! `{"error": "..."}` with no state change. CORS is open to all origins.

pub mod config;
pub mod error;
pub mod payload;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use bunny_logic::clock::Clock;
use bunny_logic::engine::BunnyEngine;
use parking_lot::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ServerError;
pub use routes::SharedEngine;

/// Build the application around `engine`, which the router takes ownership of.
pub fn router<C>(engine: BunnyEngine<C>) -> Router
where
    C: Clock + Send + 'static,
{
    let state: SharedEngine<C> = Arc::new(Mutex::new(engine));

    Router::new()
        .route("/api/status", get(routes::status::<C>))
        .route("/api/feed", post(routes::feed::<C>))
        .route("/api/play", post(routes::play::<C>))
        .route("/api/clean", post(routes::clean::<C>))
        .route("/api/reset", post(routes::reset::<C>))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
