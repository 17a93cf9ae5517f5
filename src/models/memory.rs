// Memory gauges from /proc/meminfo

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

/// Whole-machine memory usage. `used_percent` is a percentage; every other field is in
/// decimal gigabytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
pub struct MemInfo {
    pub used_percent: f64,
    pub total: f64,
    pub free: f64,
    pub avail: f64,
    pub buffers: f64,
    pub cached: f64,
    pub swap_cached: f64,
    pub active: f64,
    pub inactive: f64,
    pub active_anon: f64,
    pub inactive_anon: f64,
    pub active_file: f64,
    pub inactive_file: f64,
    pub dirty: f64,
    pub writeback: f64,
    pub anon_pages: f64,
    pub mapped: f64,
    pub kreclaimable: f64,
    pub sreclaimable: f64,
    pub sunreclaim: f64,
}
