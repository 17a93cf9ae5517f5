// Agent worker: sample every family on a fixed interval and push the snapshot.
// A failed push is logged and the next round runs on schedule.

use std::future::Future;
use std::sync::Arc;
use tokio::time::{Duration, interval};
use tracing::Instrument;

use crate::client::RelayClient;
use crate::models::MonitorSnapshot;
use crate::relay::SnapshotRelay;
use crate::sampler::Sampler;

/// Where a finished snapshot goes.
pub trait SnapshotSink: Send + Sync + 'static {
    fn push(&self, snapshot: MonitorSnapshot) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl SnapshotSink for RelayClient {
    async fn push(&self, snapshot: MonitorSnapshot) -> anyhow::Result<()> {
        RelayClient::push(self, &snapshot).await
    }
}

/// In-process relay, for single-binary setups and tests.
impl SnapshotSink for Arc<SnapshotRelay> {
    async fn push(&self, snapshot: MonitorSnapshot) -> anyhow::Result<()> {
        SnapshotRelay::push(self, snapshot).await;
        Ok(())
    }
}

pub struct AgentDeps<S> {
    pub sampler: Sampler,
    pub sink: S,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

pub struct LoopConfig {
    pub sample_interval_ms: u64,
    /// How often to log agent stats (real seconds).
    pub stats_log_interval_secs: u64,
}

pub fn spawn<S: SnapshotSink>(
    deps: AgentDeps<S>,
    config: LoopConfig,
) -> tokio::task::JoinHandle<()> {
    let AgentDeps {
        mut sampler,
        sink,
        mut shutdown_rx,
    } = deps;
    let LoopConfig {
        sample_interval_ms,
        stats_log_interval_secs,
    } = config;

    let agent_span = tracing::span!(tracing::Level::DEBUG, "agent", sample_interval_ms);
    let agent = async move {
        let mut tick = interval(Duration::from_millis(sample_interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(Duration::from_secs(stats_log_interval_secs));
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut rounds_total: u64 = 0;
        let mut push_failures_total: u64 = 0;

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let snapshot = sampler.sample_round().await;
                    rounds_total += 1;
                    if let Err(e) = sink.push(snapshot).await {
                        push_failures_total += 1;
                        tracing::warn!(
                            error = %e,
                            operation = "push_snapshot",
                            "snapshot push failed"
                        );
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Agent shutting down");
                    break;
                }
                _ = stats_log_tick.tick() => {
                    tracing::info!(
                        host = sampler.host_name(),
                        rounds_total,
                        push_failures_total,
                        "agent stats"
                    );
                }
            }
        }
    };
    tokio::spawn(agent.instrument(agent_span))
}
