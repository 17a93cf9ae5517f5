// Single-slot snapshot relay: last push wins, pulls read a copy.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::{RwLock, broadcast};
use tokio::time::{Duration, interval};

use crate::models::MonitorSnapshot;

pub struct SnapshotRelay {
    latest: RwLock<MonitorSnapshot>,
    updates: broadcast::Sender<MonitorSnapshot>,
    pushes_total: AtomicU64,
}

impl SnapshotRelay {
    /// `broadcast_capacity` bounds how far a slow stream subscriber may lag.
    pub fn new(broadcast_capacity: usize) -> Self {
        let (updates, _) = broadcast::channel(broadcast_capacity.max(1));
        Self {
            latest: RwLock::new(MonitorSnapshot::default()),
            updates,
            pushes_total: AtomicU64::new(0),
        }
    }

    /// Replace the stored snapshot and fan it out to stream subscribers.
    pub async fn push(&self, snapshot: MonitorSnapshot) {
        let mut latest = self.latest.write().await;
        *latest = snapshot.clone();
        // Sent under the write guard so stream order matches the stored value.
        // No subscribers is the normal case for pull-only viewers.
        let _ = self.updates.send(snapshot);
        self.pushes_total.fetch_add(1, Ordering::Relaxed);
    }

    /// The most recent push, or the default snapshot if there has been none.
    pub async fn pull(&self) -> MonitorSnapshot {
        self.latest.read().await.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MonitorSnapshot> {
        self.updates.subscribe()
    }

    pub fn pushes_total(&self) -> u64 {
        self.pushes_total.load(Ordering::Relaxed)
    }
}

/// Periodically log relay activity until `shutdown_rx` fires.
pub fn spawn_stats_log(
    relay: Arc<SnapshotRelay>,
    ws_connections: Arc<AtomicUsize>,
    stats_log_interval_secs: u64,
    mut shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut tick = interval(Duration::from_secs(stats_log_interval_secs));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let latest_host = relay.pull().await.host_name;
                    tracing::info!(
                        pushes_total = relay.pushes_total(),
                        ws_snapshot_clients = ws_connections.load(Ordering::Relaxed),
                        latest_host = %latest_host,
                        "relay stats"
                    );
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Relay stats log shutting down");
                    break;
                }
            }
        }
    })
}
