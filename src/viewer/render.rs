// Plain-text tables, one per family.

use std::fmt;

use crate::models::MonitorSnapshot;

/// Renders a snapshot as aligned text tables.
pub struct SnapshotTable<'a>(pub &'a MonitorSnapshot);

impl fmt::Display for SnapshotTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        let host = if s.host_name.is_empty() {
            "(no data yet)"
        } else {
            s.host_name.as_str()
        };
        writeln!(f, "host: {host}")?;
        writeln!(f)?;

        writeln!(f, "{:>10} {:>10} {:>10}", "load_1", "load_3", "load_15")?;
        writeln!(
            f,
            "{:>10.2} {:>10.2} {:>10.2}",
            s.cpu_load.avg_1, s.cpu_load.avg_3, s.cpu_load.avg_15
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<8} {:>12} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "name", "cpu_percent", "user", "system", "nice", "idle", "io_wait"
        )?;
        for c in &s.cpu_stat {
            writeln!(
                f,
                "{:<8} {:>12.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
                c.cpu_name,
                c.cpu_percent,
                c.usr_percent,
                c.system_percent,
                c.nice_percent,
                c.idle_percent,
                c.io_wait_percent
            )?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:<8} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}",
            "cpu", "hi", "timer", "net_tx", "net_rx", "block", "irq_poll", "tasklet", "sched",
            "hrtimer", "rcu"
        )?;
        for i in &s.soft_irq {
            writeln!(
                f,
                "{:<8} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>9.1}",
                i.cpu_name,
                i.hi,
                i.timer,
                i.net_tx,
                i.net_rx,
                i.block,
                i.irq_poll,
                i.tasklet,
                i.sched,
                i.hrtimer,
                i.rcu
            )?;
        }
        writeln!(f)?;

        let m = &s.mem_info;
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9} {:>9} {:>9} {:>11} {:>9} {:>9} {:>11}",
            "used_percent",
            "total",
            "free",
            "avail",
            "buffers",
            "cached",
            "swap_cached",
            "active",
            "inactive",
            "active_anon"
        )?;
        writeln!(
            f,
            "{:>12.2} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>11.2} {:>9.2} {:>9.2} {:>11.2}",
            m.used_percent,
            m.total,
            m.free,
            m.avail,
            m.buffers,
            m.cached,
            m.swap_cached,
            m.active,
            m.inactive,
            m.active_anon
        )?;
        writeln!(
            f,
            "{:>13} {:>11} {:>13} {:>9} {:>9} {:>10} {:>9} {:>12} {:>12} {:>10}",
            "inactive_anon",
            "active_file",
            "inactive_file",
            "dirty",
            "writeback",
            "anon_pages",
            "mapped",
            "kreclaimable",
            "sreclaimable",
            "sunreclaim"
        )?;
        writeln!(
            f,
            "{:>13.2} {:>11.2} {:>13.2} {:>9.3} {:>9.3} {:>10.2} {:>9.2} {:>12.2} {:>12.2} {:>10.2}",
            m.inactive_anon,
            m.active_file,
            m.inactive_file,
            m.dirty,
            m.writeback,
            m.anon_pages,
            m.mapped,
            m.kreclaimable,
            m.sreclaimable,
            m.sunreclaim
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<12} {:>10} {:>10} {:>17} {:>16}",
            "name", "send_rate", "rcv_rate", "send_packets_rate", "rcv_packets_rate"
        )?;
        for n in &s.net_info {
            writeln!(
                f,
                "{:<12} {:>10.2} {:>10.2} {:>17.1} {:>16.1}",
                n.name, n.send_rate, n.rcv_rate, n.send_packets_rate, n.rcv_packets_rate
            )?;
        }
        Ok(())
    }
}
