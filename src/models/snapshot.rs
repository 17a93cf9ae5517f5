// One sampling round for one host

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

use super::{CpuLoad, CpuStat, MemInfo, NetInfo, SoftIrq};

/// Everything the agent produced in one round. The default value (empty host name, all
/// zeros, empty lists) is what the relay serves before the first push.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
pub struct MonitorSnapshot {
    pub host_name: String,
    pub cpu_load: CpuLoad,
    pub cpu_stat: Vec<CpuStat>,
    pub soft_irq: Vec<SoftIrq>,
    pub mem_info: MemInfo,
    pub net_info: Vec<NetInfo>,
}

impl MonitorSnapshot {
    pub fn new(host_name: impl Into<String>) -> Self {
        Self {
            host_name: host_name.into(),
            ..Default::default()
        }
    }
}
