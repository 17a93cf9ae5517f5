// Viewer: pull the latest snapshot on a fixed interval and print it as text tables.
// On a failed pull the last good snapshot stays on screen.

mod render;

pub use render::SnapshotTable;

use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use tokio::time::{Duration, interval};

use crate::client::RelayClient;
use crate::models::MonitorSnapshot;
use crate::relay::SnapshotRelay;

/// Where the viewer gets snapshots from.
pub trait SnapshotSource: Send + Sync + 'static {
    fn pull(&self) -> impl Future<Output = anyhow::Result<MonitorSnapshot>> + Send;
}

impl SnapshotSource for RelayClient {
    async fn pull(&self) -> anyhow::Result<MonitorSnapshot> {
        RelayClient::pull(self).await
    }
}

impl SnapshotSource for Arc<SnapshotRelay> {
    async fn pull(&self) -> anyhow::Result<MonitorSnapshot> {
        Ok(SnapshotRelay::pull(self).await)
    }
}

pub struct Viewer<S> {
    source: S,
    last: Option<MonitorSnapshot>,
    pull_failures: u64,
}

impl<S: SnapshotSource> Viewer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last: None,
            pull_failures: 0,
        }
    }

    /// Pull once. Returns what should be displayed: the fresh snapshot, or the previous
    /// one if the pull failed (None until the first success).
    pub async fn refresh(&mut self) -> Option<&MonitorSnapshot> {
        match self.source.pull().await {
            Ok(snapshot) => self.last = Some(snapshot),
            Err(e) => {
                self.pull_failures += 1;
                tracing::warn!(
                    error = %e,
                    operation = "pull_snapshot",
                    pull_failures = self.pull_failures,
                    "snapshot pull failed; keeping last snapshot"
                );
            }
        }
        self.last.as_ref()
    }

    pub fn last(&self) -> Option<&MonitorSnapshot> {
        self.last.as_ref()
    }

    pub fn pull_failures(&self) -> u64 {
        self.pull_failures
    }
}

/// Clear-screen + home, so each frame redraws in place.
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Runs until `shutdown_rx` fires, writing one frame per successful (or stale) refresh.
pub fn spawn<S, W>(
    mut viewer: Viewer<S>,
    mut out: W,
    poll_interval_ms: u64,
    mut shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<()>
where
    S: SnapshotSource,
    W: Write + Send + 'static,
{
    tokio::spawn(async move {
        let mut tick = interval(Duration::from_millis(poll_interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let Some(snapshot) = viewer.refresh().await else {
                        continue;
                    };
                    let frame = format!("{CLEAR}{}", SnapshotTable(snapshot));
                    if let Err(e) = out.write_all(frame.as_bytes()).and_then(|_| out.flush()) {
                        tracing::warn!(error = %e, "viewer output closed");
                        break;
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Viewer shutting down");
                    break;
                }
            }
        }
    })
}
