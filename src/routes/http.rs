// Push/pull handlers and version

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use bytes::Bytes;

use super::AppState;
use crate::models::MonitorSnapshot;
use crate::wire::decode_snapshot;

/// Package name (from Cargo.toml).
const NAME: &str = env!("CARGO_PKG_NAME");
/// Package version (from Cargo.toml).
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET /version: service name and version.
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/snapshot: latest pushed snapshot, or the empty default.
pub(super) async fn pull_snapshot(State(state): State<AppState>) -> Json<MonitorSnapshot> {
    Json(state.relay.pull().await)
}

/// POST /api/snapshot: replace the stored snapshot. JSON or wincode body.
pub(super) async fn push_snapshot(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, (StatusCode, String)> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let snapshot = decode_snapshot(content_type, &body).map_err(|e| {
        tracing::info!(error = %e, operation = "push_snapshot", "rejected snapshot body");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;
    tracing::debug!(
        host = %snapshot.host_name,
        cpu_stat = snapshot.cpu_stat.len(),
        net_info = snapshot.net_info.len(),
        soft_irq = snapshot.soft_irq.len(),
        "snapshot pushed"
    );
    state.relay.push(snapshot).await;
    Ok(StatusCode::NO_CONTENT)
}
