// Relay HTTP + WebSocket routes

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tower_http::cors::{Any, CorsLayer};

use crate::client::SNAPSHOT_PATH;
use crate::relay::SnapshotRelay;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) relay: Arc<SnapshotRelay>,
    pub(crate) ws_connections: Arc<AtomicUsize>,
}

pub fn app(relay: Arc<SnapshotRelay>, ws_connections: Arc<AtomicUsize>) -> Router {
    let state = AppState {
        relay,
        ws_connections,
    };
    Router::new()
        .route("/", get(|| async { "procwatch relay" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route(
            SNAPSHOT_PATH,
            get(http::pull_snapshot).post(http::push_snapshot),
        ) // GET + POST /api/snapshot
        .route("/ws/snapshot", get(ws::ws_snapshot)) // WS /ws/snapshot
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
