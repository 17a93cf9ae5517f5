// Wire models shared by agent, relay and viewer

mod cpu;
mod memory;
mod network;
mod snapshot;
mod soft_irq;

pub use cpu::{CpuLoad, CpuStat};
pub use memory::MemInfo;
pub use network::NetInfo;
pub use snapshot::MonitorSnapshot;
pub use soft_irq::SoftIrq;
