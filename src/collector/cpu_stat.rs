// /proc/stat: cumulative per-CPU tick counters -> percentage of elapsed ticks.

use std::time::Instant;
use tracing::debug;

use super::{RecordReader, SampleStore};
use crate::models::CpuStat;

/// Raw tick counters of one `cpu*` line, in kernel USER_HZ ticks since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTicks {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub io_wait: u64,
    pub irq: u64,
    pub soft_irq: u64,
    pub steal: u64,
    pub guest: u64,
    pub guest_nice: u64,
}

impl CpuTicks {
    /// Parse the ten tick fields that follow the cpu name.
    pub fn parse(fields: &[&str]) -> Option<Self> {
        let mut v = [0u64; 10];
        if fields.len() < v.len() {
            return None;
        }
        for (slot, token) in v.iter_mut().zip(fields) {
            *slot = token.parse().ok()?;
        }
        let [user, nice, system, idle, io_wait, irq, soft_irq, steal, guest, guest_nice] = v;
        Some(Self {
            user,
            nice,
            system,
            idle,
            io_wait,
            irq,
            soft_irq,
            steal,
            guest,
            guest_nice,
        })
    }

    /// All accounted ticks, or None if the sum overflows. guest and guest_nice are
    /// already folded into user and nice.
    pub fn total(&self) -> Option<u64> {
        [
            self.user,
            self.system,
            self.idle,
            self.nice,
            self.io_wait,
            self.irq,
            self.soft_irq,
            self.steal,
        ]
        .into_iter()
        .try_fold(0u64, u64::checked_add)
    }

    /// Ticks spent doing work (everything except idle and io_wait).
    pub fn busy(&self) -> Option<u64> {
        [
            self.user,
            self.system,
            self.nice,
            self.irq,
            self.soft_irq,
            self.steal,
        ]
        .into_iter()
        .try_fold(0u64, u64::checked_add)
    }
}

#[derive(Debug, Default)]
pub struct CpuStatCollector {
    store: SampleStore<CpuTicks>,
}

impl CpuStatCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &SampleStore<CpuTicks> {
        &self.store
    }

    /// Difference every `cpu*` line against its previous sample. Lines that fail to
    /// parse are skipped; the rest of the pass continues.
    pub fn update(&mut self, text: &str, now: Instant) -> Vec<CpuStat> {
        let mut out = Vec::new();
        for record in RecordReader::new(text) {
            let Some((name, fields)) = record.split_first() else {
                continue;
            };
            if !name.contains("cpu") {
                continue;
            }
            let Some(ticks) = CpuTicks::parse(fields).filter(|t| t.total().is_some()) else {
                debug!(family = "cpu_stat", cpu = %name, "skipping malformed cpu line");
                continue;
            };
            if let Some((prev, _)) = self.store.upsert(name, ticks, now)
                && let Some(stat) = percentages(name, &prev, &ticks)
            {
                out.push(stat);
            }
        }
        out
    }
}

/// None when no ticks elapsed or any counter went backwards.
fn percentages(name: &str, prev: &CpuTicks, curr: &CpuTicks) -> Option<CpuStat> {
    let total = curr.total()?.checked_sub(prev.total()?)?;
    if total == 0 {
        return None;
    }
    let total = total as f64;
    let share = |new: u64, old: u64| new.checked_sub(old).map(|d| d as f64 / total * 100.0);

    Some(CpuStat {
        cpu_name: name.to_string(),
        cpu_percent: share(curr.busy()?, prev.busy()?)?,
        usr_percent: share(curr.user, prev.user)?,
        system_percent: share(curr.system, prev.system)?,
        nice_percent: share(curr.nice, prev.nice)?,
        idle_percent: share(curr.idle, prev.idle)?,
        io_wait_percent: share(curr.io_wait, prev.io_wait)?,
        irq_percent: share(curr.irq, prev.irq)?,
        soft_irq_percent: share(curr.soft_irq, prev.soft_irq)?,
    })
}
