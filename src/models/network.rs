// Network interface throughput models

use serde::{Deserialize, Serialize};
use wincode::{SchemaRead, SchemaWrite};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, SchemaRead, SchemaWrite)]
pub struct NetInfo {
    pub name: String,
    /// Transmit throughput in KiB/s.
    pub send_rate: f64,
    /// Receive throughput in KiB/s.
    pub rcv_rate: f64,
    pub send_packets_rate: f64,
    pub rcv_packets_rate: f64,
    #[serde(default)]
    pub err_in_rate: f64,
    #[serde(default)]
    pub drop_in_rate: f64,
    #[serde(default)]
    pub err_out_rate: f64,
    #[serde(default)]
    pub drop_out_rate: f64,
}
