// /proc/loadavg: three leading floats, no state.

use super::{CollectError, Family, RecordReader};
use crate::models::CpuLoad;

#[derive(Debug, Clone, Copy, Default)]
pub struct CpuLoadCollector;

impl CpuLoadCollector {
    pub fn parse(text: &str) -> Result<CpuLoad, CollectError> {
        let record = RecordReader::new(text)
            .next()
            .ok_or_else(|| CollectError::malformed(Family::CpuLoad, "empty source"))?;
        if record.len() < 3 {
            return Err(CollectError::malformed(
                Family::CpuLoad,
                format!("expected 3 load averages, got {} fields", record.len()),
            ));
        }
        let avg = |i: usize| {
            record[i].parse::<f64>().map_err(|e| {
                CollectError::malformed(Family::CpuLoad, format!("{:?}: {}", record[i], e))
            })
        };
        Ok(CpuLoad {
            avg_1: avg(0)?,
            avg_3: avg(1)?,
            avg_15: avg(2)?,
        })
    }
}
