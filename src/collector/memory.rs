// /proc/meminfo: instantaneous gauges, matched by label, reported in decimal GB.

use super::{CollectError, Family, RecordReader};
use crate::models::MemInfo;

/// meminfo reports KiB; dividing by this yields the (decimal) GB shown to readers.
pub const KB_TO_GB: f64 = 1000.0 * 1000.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct MemCollector;

#[derive(Debug, Default)]
struct MemKib {
    total: Option<u64>,
    free: u64,
    avail: u64,
    buffers: u64,
    cached: u64,
    swap_cached: u64,
    active: u64,
    inactive: u64,
    active_anon: u64,
    inactive_anon: u64,
    active_file: u64,
    inactive_file: u64,
    dirty: u64,
    writeback: u64,
    anon_pages: u64,
    mapped: u64,
    kreclaimable: u64,
    sreclaimable: u64,
    sunreclaim: u64,
}

impl MemKib {
    fn slot(&mut self, label: &str) -> Option<&mut u64> {
        let slot = match label {
            "MemFree:" => &mut self.free,
            "MemAvailable:" => &mut self.avail,
            "Buffers:" => &mut self.buffers,
            "Cached:" => &mut self.cached,
            "SwapCached:" => &mut self.swap_cached,
            "Active:" => &mut self.active,
            "Inactive:" => &mut self.inactive,
            "Active(anon):" => &mut self.active_anon,
            "Inactive(anon):" => &mut self.inactive_anon,
            "Active(file):" => &mut self.active_file,
            "Inactive(file):" => &mut self.inactive_file,
            "Dirty:" => &mut self.dirty,
            "Writeback:" => &mut self.writeback,
            "AnonPages:" => &mut self.anon_pages,
            "Mapped:" => &mut self.mapped,
            "KReclaimable:" => &mut self.kreclaimable,
            "SReclaimable:" => &mut self.sreclaimable,
            "SUnreclaim:" => &mut self.sunreclaim,
            _ => return None,
        };
        Some(slot)
    }
}

impl MemCollector {
    pub fn parse(text: &str) -> Result<MemInfo, CollectError> {
        let mut kib = MemKib::default();
        for record in RecordReader::new(text) {
            let Some(label) = record.first().copied() else {
                continue;
            };
            let is_total = label == "MemTotal:";
            if !is_total && kib.slot(label).is_none() {
                continue;
            }
            let value: u64 = record
                .get(1)
                .and_then(|v| v.parse().ok())
                .ok_or_else(|| {
                    CollectError::malformed(Family::Memory, format!("bad value for {label}"))
                })?;
            if is_total {
                kib.total = Some(value);
            } else if let Some(slot) = kib.slot(label) {
                *slot = value;
            }
        }

        let total = kib
            .total
            .ok_or_else(|| CollectError::malformed(Family::Memory, "MemTotal missing"))?;
        let used_percent = if total > 0 {
            total.saturating_sub(kib.avail) as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let gb = |v: u64| v as f64 / KB_TO_GB;

        Ok(MemInfo {
            used_percent,
            total: gb(total),
            free: gb(kib.free),
            avail: gb(kib.avail),
            buffers: gb(kib.buffers),
            cached: gb(kib.cached),
            swap_cached: gb(kib.swap_cached),
            active: gb(kib.active),
            inactive: gb(kib.inactive),
            active_anon: gb(kib.active_anon),
            inactive_anon: gb(kib.inactive_anon),
            active_file: gb(kib.active_file),
            inactive_file: gb(kib.inactive_file),
            dirty: gb(kib.dirty),
            writeback: gb(kib.writeback),
            anon_pages: gb(kib.anon_pages),
            mapped: gb(kib.mapped),
            kreclaimable: gb(kib.kreclaimable),
            sreclaimable: gb(kib.sreclaimable),
            sunreclaim: gb(kib.sunreclaim),
        })
    }
}
