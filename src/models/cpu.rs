// CPU load averages and per-core utilisation models

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

/// 1/3/15-minute load averages as reported by /proc/loadavg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
pub struct CpuLoad {
    pub avg_1: f64,
    pub avg_3: f64,
    pub avg_15: f64,
}

/// Share of elapsed ticks per state for one CPU line of /proc/stat, in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
pub struct CpuStat {
    pub cpu_name: String,
    pub cpu_percent: f64,
    pub usr_percent: f64,
    pub system_percent: f64,
    pub nice_percent: f64,
    pub idle_percent: f64,
    pub io_wait_percent: f64,
    pub irq_percent: f64,
    pub soft_irq_percent: f64,
}
