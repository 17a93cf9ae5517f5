// Per-CPU softirq rate models

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

/// Softirqs per second for one CPU column of /proc/softirqs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
pub struct SoftIrq {
    pub cpu_name: String,
    pub hi: f64,
    pub timer: f64,
    pub net_tx: f64,
    pub net_rx: f64,
    pub block: f64,
    pub irq_poll: f64,
    pub tasklet: f64,
    pub sched: f64,
    pub hrtimer: f64,
    pub rcu: f64,
}
