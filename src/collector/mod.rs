// Per-family /proc collectors. Each owns its previous-sample state and turns cumulative
// kernel counters into rates for one round at a time.

mod cpu_load;
mod cpu_stat;
mod error;
mod memory;
mod network;
mod reader;
mod soft_irq;
mod store;

pub use cpu_load::CpuLoadCollector;
pub use cpu_stat::{CpuStatCollector, CpuTicks};
pub use error::CollectError;
pub use memory::{KB_TO_GB, MemCollector};
pub use network::{NetCollector, NetCounters};
pub use reader::{RecordReader, read_source};
pub use soft_irq::{SOFTIRQ_ROWS, SoftIrqCollector, SoftIrqCounts};
pub use store::SampleStore;

use std::fmt;
use std::time::Instant;

use crate::models::MonitorSnapshot;

/// The closed set of metric families, each backed by one file under the proc root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    CpuLoad,
    CpuStat,
    Memory,
    Network,
    SoftIrq,
}

impl Family {
    /// Path of the family's source, relative to the proc root.
    pub fn source(self) -> &'static str {
        match self {
            Family::CpuLoad => "loadavg",
            Family::CpuStat => "stat",
            Family::Memory => "meminfo",
            Family::Network => "net/dev",
            Family::SoftIrq => "softirqs",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::CpuLoad => "cpu_load",
            Family::CpuStat => "cpu_stat",
            Family::Memory => "mem_info",
            Family::Network => "net_info",
            Family::SoftIrq => "soft_irq",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One collector per family, dispatched by match.
#[derive(Debug)]
pub enum FamilyCollector {
    CpuLoad(CpuLoadCollector),
    CpuStat(CpuStatCollector),
    Memory(MemCollector),
    Network(NetCollector),
    SoftIrq(SoftIrqCollector),
}

impl FamilyCollector {
    /// Every family, in the order a round samples them.
    pub fn all() -> Vec<Self> {
        vec![
            FamilyCollector::SoftIrq(SoftIrqCollector::new()),
            FamilyCollector::CpuLoad(CpuLoadCollector),
            FamilyCollector::CpuStat(CpuStatCollector::new()),
            FamilyCollector::Memory(MemCollector),
            FamilyCollector::Network(NetCollector::new()),
        ]
    }

    pub fn family(&self) -> Family {
        match self {
            FamilyCollector::CpuLoad(_) => Family::CpuLoad,
            FamilyCollector::CpuStat(_) => Family::CpuStat,
            FamilyCollector::Memory(_) => Family::Memory,
            FamilyCollector::Network(_) => Family::Network,
            FamilyCollector::SoftIrq(_) => Family::SoftIrq,
        }
    }

    /// Feed one read of the family's source, taken at `now`, and write this family's
    /// share of `snapshot`. Returns how many entries were emitted.
    pub fn update(
        &mut self,
        text: &str,
        now: Instant,
        snapshot: &mut MonitorSnapshot,
    ) -> Result<usize, CollectError> {
        match self {
            FamilyCollector::CpuLoad(_) => {
                snapshot.cpu_load = CpuLoadCollector::parse(text)?;
                Ok(1)
            }
            FamilyCollector::CpuStat(c) => {
                snapshot.cpu_stat = c.update(text, now);
                Ok(snapshot.cpu_stat.len())
            }
            FamilyCollector::Memory(_) => {
                snapshot.mem_info = MemCollector::parse(text)?;
                Ok(1)
            }
            FamilyCollector::Network(c) => {
                snapshot.net_info = c.update(text, now);
                Ok(snapshot.net_info.len())
            }
            FamilyCollector::SoftIrq(c) => {
                snapshot.soft_irq = c.update(text, now)?;
                Ok(snapshot.soft_irq.len())
            }
        }
    }
}

/// Seconds between two samples, or None when the interval is not strictly positive.
pub(crate) fn elapsed_secs(now: Instant, prev: Instant) -> Option<f64> {
    let secs = now.checked_duration_since(prev)?.as_secs_f64();
    (secs > 0.0).then_some(secs)
}

/// Per-second rate of a monotonic counter; None when the counter went backwards.
pub(crate) fn counter_rate(new: u64, old: u64, elapsed: f64) -> Option<f64> {
    new.checked_sub(old).map(|d| d as f64 / elapsed)
}
