// HTTP client for the relay: agents push, viewers pull.

use reqwest::header::CONTENT_TYPE;
use tracing::instrument;

use crate::models::MonitorSnapshot;
use crate::wire::{WINCODE_CONTENT_TYPE, encode_wincode};

pub const SNAPSHOT_PATH: &str = "/api/snapshot";

#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    snapshot_url: String,
}

impl RelayClient {
    pub fn new(relay_url: &str) -> anyhow::Result<Self> {
        // TODO: bound push/pull with a request timeout; both currently wait indefinitely.
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            snapshot_url: format!("{}{}", relay_url.trim_end_matches('/'), SNAPSHOT_PATH),
        })
    }

    #[instrument(skip(self, snapshot), fields(operation = "push_snapshot", host = %snapshot.host_name))]
    pub async fn push(&self, snapshot: &MonitorSnapshot) -> anyhow::Result<()> {
        let body = encode_wincode(snapshot)?;
        self.http
            .post(&self.snapshot_url)
            .header(CONTENT_TYPE, WINCODE_CONTENT_TYPE)
            .body(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    #[instrument(skip(self), fields(operation = "pull_snapshot"))]
    pub async fn pull(&self) -> anyhow::Result<MonitorSnapshot> {
        let snapshot = self
            .http
            .get(&self.snapshot_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(snapshot)
    }
}
