// /proc/softirqs: a fixed 10-row table (irq type x CPU) -> per-CPU rates per type.

use std::time::Instant;

use super::{CollectError, Family, RecordReader, SampleStore, counter_rate, elapsed_secs};
use crate::models::SoftIrq;

/// Row labels of /proc/softirqs, top to bottom.
pub const SOFTIRQ_ROWS: [&str; 10] = [
    "HI", "TIMER", "NET_TX", "NET_RX", "BLOCK", "IRQ_POLL", "TASKLET", "SCHED", "HRTIMER", "RCU",
];

/// One CPU column of the table, indexed like [`SOFTIRQ_ROWS`].
pub type SoftIrqCounts = [u64; SOFTIRQ_ROWS.len()];

#[derive(Debug, Default)]
pub struct SoftIrqCollector {
    store: SampleStore<SoftIrqCounts>,
}

impl SoftIrqCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &SampleStore<SoftIrqCounts> {
        &self.store
    }

    /// The table is validated and parsed in full before any stored sample is touched:
    /// a missing or out-of-order row would shift every column, so it fails the round.
    pub fn update(&mut self, text: &str, now: Instant) -> Result<Vec<SoftIrq>, CollectError> {
        let columns = parse_table(text)?;
        let mut out = Vec::new();
        for (cpu, counts) in columns {
            if let Some((prev, prev_at)) = self.store.upsert(cpu, counts, now)
                && let Some(elapsed) = elapsed_secs(now, prev_at)
                && let Some(rates) = rates(cpu, &prev, &counts, elapsed)
            {
                out.push(rates);
            }
        }
        Ok(out)
    }
}

fn parse_table(text: &str) -> Result<Vec<(&str, SoftIrqCounts)>, CollectError> {
    let table = RecordReader::new(text).first(SOFTIRQ_ROWS.len() + 1);
    if table.len() < SOFTIRQ_ROWS.len() + 1 {
        return Err(CollectError::malformed(
            Family::SoftIrq,
            format!(
                "expected {} rows, got {}",
                SOFTIRQ_ROWS.len() + 1,
                table.len()
            ),
        ));
    }
    let (header, rows) = table.split_at(1);
    let cpus = &header[0];

    for (row, label) in rows.iter().zip(SOFTIRQ_ROWS) {
        let found = row.first().map(|t| t.trim_end_matches(':'));
        if found != Some(label) {
            return Err(CollectError::malformed(
                Family::SoftIrq,
                format!("expected row {label}, found {:?}", found.unwrap_or("")),
            ));
        }
        if row.len() < cpus.len() + 1 {
            return Err(CollectError::malformed(
                Family::SoftIrq,
                format!("row {label} has {} of {} columns", row.len() - 1, cpus.len()),
            ));
        }
    }

    let mut columns = Vec::with_capacity(cpus.len());
    for (col, cpu) in cpus.iter().enumerate() {
        let mut counts: SoftIrqCounts = [0; SOFTIRQ_ROWS.len()];
        for (slot, row) in counts.iter_mut().zip(rows) {
            let token = row[col + 1];
            *slot = token.parse().map_err(|_| {
                CollectError::malformed(
                    Family::SoftIrq,
                    format!("non-numeric count {token:?} for {cpu}"),
                )
            })?;
        }
        columns.push((*cpu, counts));
    }
    Ok(columns)
}

fn rates(
    cpu: &str,
    prev: &SoftIrqCounts,
    curr: &SoftIrqCounts,
    elapsed: f64,
) -> Option<SoftIrq> {
    let mut r = [0.0; SOFTIRQ_ROWS.len()];
    for ((slot, new), old) in r.iter_mut().zip(curr).zip(prev) {
        *slot = counter_rate(*new, *old, elapsed)?;
    }
    let [hi, timer, net_tx, net_rx, block, irq_poll, tasklet, sched, hrtimer, rcu] = r;
    Some(SoftIrq {
        cpu_name: cpu.to_string(),
        hi,
        timer,
        net_tx,
        net_rx,
        block,
        irq_poll,
        tasklet,
        sched,
        hrtimer,
        rcu,
    })
}
