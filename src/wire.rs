// Snapshot body codecs for the push endpoint: JSON, or wincode for compact agent pushes.

use crate::models::MonitorSnapshot;

/// Content type of a wincode-encoded snapshot body.
pub const WINCODE_CONTENT_TYPE: &str = "application/octet-stream";

pub fn encode_wincode(snapshot: &MonitorSnapshot) -> anyhow::Result<Vec<u8>> {
    wincode::serialize(snapshot).map_err(|e| anyhow::anyhow!("wincode encode snapshot: {}", e))
}

/// Decode a pushed body. Anything not marked as wincode is treated as JSON.
pub fn decode_snapshot(content_type: Option<&str>, body: &[u8]) -> anyhow::Result<MonitorSnapshot> {
    let is_wincode = content_type.is_some_and(|ct| ct.starts_with(WINCODE_CONTENT_TYPE));
    if is_wincode {
        wincode::deserialize(body).map_err(|e| anyhow::anyhow!("wincode decode snapshot: {}", e))
    } else {
        serde_json::from_slice(body).map_err(|e| anyhow::anyhow!("json decode snapshot: {}", e))
    }
}
