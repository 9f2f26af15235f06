//! HTTP handlers. Each one holds the engine lock for its whole
//! decay → mutate → snapshot sequence.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use bunny_logic::clock::Clock;
use bunny_logic::engine::{BunnyEngine, Snapshot};
use parking_lot::Mutex;
use tracing::instrument;

use crate::payload::{ActionRequest, ApiResponse};

/// The one engine instance, shared by every request.
pub type SharedEngine<C> = Arc<Mutex<BunnyEngine<C>>>;

#[instrument(skip_all)]
pub async fn status<C>(State(engine): State<SharedEngine<C>>) -> Json<Snapshot>
where
    C: Clock + Send + 'static,
{
    Json(engine.lock().status())
}

#[instrument(skip_all)]
pub async fn feed<C>(State(engine): State<SharedEngine<C>>, body: Bytes) -> Json<ApiResponse>
where
    C: Clock + Send + 'static,
{
    let request = ActionRequest::from_body(&body);
    let result = request.food().map(|food| {
        tracing::debug!(%food, "Feeding");
        engine.lock().feed(food)
    });
    if let Err(e) = &result {
        tracing::warn!(kind = ?request.kind, "Rejected feed: {}", e);
    }
    Json(result.into())
}

#[instrument(skip_all)]
pub async fn play<C>(State(engine): State<SharedEngine<C>>, body: Bytes) -> Json<ApiResponse>
where
    C: Clock + Send + 'static,
{
    let request = ActionRequest::from_body(&body);
    let result = request.play().map(|kind| {
        tracing::debug!(%kind, "Playing");
        engine.lock().play(kind)
    });
    if let Err(e) = &result {
        tracing::warn!(kind = ?request.kind, "Rejected play: {}", e);
    }
    Json(result.into())
}

#[instrument(skip_all)]
pub async fn clean<C>(State(engine): State<SharedEngine<C>>) -> Json<Snapshot>
where
    C: Clock + Send + 'static,
{
    Json(engine.lock().clean())
}

#[instrument(skip_all)]
pub async fn reset<C>(State(engine): State<SharedEngine<C>>) -> Json<Snapshot>
where
    C: Clock + Send + 'static,
{
    Json(engine.lock().reset())
}
