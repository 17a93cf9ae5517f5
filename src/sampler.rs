// One sampling round: read every /proc source and run its collector.

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::collector::{FamilyCollector, read_source};
use crate::models::MonitorSnapshot;

/// Owns the five collectors (and therefore all previous-sample state) for one agent.
pub struct Sampler {
    proc_root: PathBuf,
    host_name: String,
    collectors: Vec<FamilyCollector>,
}

impl Sampler {
    pub fn new(proc_root: impl Into<PathBuf>, host_name: impl Into<String>) -> Self {
        Self {
            proc_root: proc_root.into(),
            host_name: host_name.into(),
            collectors: FamilyCollector::all(),
        }
    }

    pub fn proc_root(&self) -> &Path {
        &self.proc_root
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Run every collector once and assemble the snapshot. A family whose source cannot
    /// be read or parsed is left at its default value; the others are unaffected.
    #[instrument(skip(self), fields(operation = "sample_round", host = %self.host_name))]
    pub async fn sample_round(&mut self) -> MonitorSnapshot {
        let mut snapshot = MonitorSnapshot::new(self.host_name.clone());
        for collector in &mut self.collectors {
            let family = collector.family();
            let path = self.proc_root.join(family.source());
            let text = match read_source(&path).await {
                Ok(t) => t,
                Err(e) => {
                    warn!(error = %e, family = %family, "source unavailable");
                    continue;
                }
            };
            match collector.update(&text, Instant::now(), &mut snapshot) {
                Ok(emitted) => debug!(family = %family, emitted, "collector updated"),
                Err(e) => warn!(error = %e, family = %family, "collector round failed"),
            }
        }
        snapshot
    }
}
