// Shared test helpers: /proc fixtures and sample snapshots

#![allow(dead_code)]

use procwatch::models::*;
use std::path::Path;

pub const LOADAVG: &str = "0.52 0.58 0.59 1/467 12345\n";

pub const MEMINFO: &str = "\
MemTotal:       16000000 kB
MemFree:         4000000 kB
MemAvailable:    8000000 kB
Buffers:          250000 kB
Cached:          3000000 kB
SwapCached:            0 kB
Active:          6000000 kB
Inactive:        2500000 kB
Active(anon):    4000000 kB
Inactive(anon):   100000 kB
Active(file):    2000000 kB
Inactive(file):  2400000 kB
Unevictable:           0 kB
Dirty:              1200 kB
Writeback:             0 kB
AnonPages:       4100000 kB
Mapped:           800000 kB
KReclaimable:     300000 kB
SReclaimable:     280000 kB
SUnreclaim:       120000 kB
";

/// /proc/stat with an aggregate line, two CPUs and the trailing non-cpu lines.
pub fn stat(agg: [u64; 10], cpu0: [u64; 10], cpu1: [u64; 10]) -> String {
    let line = |name: &str, v: [u64; 10]| {
        let ticks: Vec<String> = v.iter().map(|t| t.to_string()).collect();
        format!("{name} {}\n", ticks.join(" "))
    };
    format!(
        "{}{}{}intr 123456 0 0\nctxt 987654\nbtime 1700000000\nprocesses 4242\n",
        line("cpu", agg),
        line("cpu0", cpu0),
        line("cpu1", cpu1)
    )
}

pub const STAT_T0: [u64; 10] = [100, 0, 50, 200, 0, 0, 0, 0, 0, 0];
pub const STAT_T1: [u64; 10] = [150, 0, 75, 250, 0, 0, 0, 0, 0, 0];

/// /proc/net/dev with `lo` and `eth0`; receive fields at 1-4, transmit at 9-12.
pub fn net_dev(eth0_rcv_bytes: u64, eth0_snd_bytes: u64) -> String {
    format!(
        "Inter-|   Receive                                                |  Transmit\n \
face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed\n    \
lo:    5000      50    0    0    0     0          0         0     5000      50    0    0    0     0       0          0\n  \
eth0: {eth0_rcv_bytes}    1000    0    0    0     0          0         0 {eth0_snd_bytes}     800    0    0    0     0       0          0\n"
    )
}

/// /proc/softirqs for two CPUs. `scale` multiplies every count.
pub fn softirqs(scale: u64) -> String {
    let rows: [(&str, u64, u64); 10] = [
        ("HI", 1, 0),
        ("TIMER", 1000, 900),
        ("NET_TX", 5, 3),
        ("NET_RX", 100, 80),
        ("BLOCK", 10, 20),
        ("IRQ_POLL", 0, 0),
        ("TASKLET", 2, 1),
        ("SCHED", 500, 400),
        ("HRTIMER", 0, 0),
        ("RCU", 300, 250),
    ];
    let mut s = String::from("                    CPU0       CPU1\n");
    for (label, a, b) in rows {
        s.push_str(&format!(
            "{:>12}: {:>10} {:>10}\n",
            label,
            a * scale,
            b * scale
        ));
    }
    s
}

/// Write a fake proc tree (`loadavg`, `stat`, `meminfo`, `net/dev`, `softirqs`).
pub fn write_proc_root(root: &Path, stat_text: &str, net_text: &str, softirq_text: &str) {
    std::fs::create_dir_all(root.join("net")).unwrap();
    std::fs::write(root.join("loadavg"), LOADAVG).unwrap();
    std::fs::write(root.join("stat"), stat_text).unwrap();
    std::fs::write(root.join("meminfo"), MEMINFO).unwrap();
    std::fs::write(root.join("net/dev"), net_text).unwrap();
    std::fs::write(root.join("softirqs"), softirq_text).unwrap();
}

pub fn sample_snapshot(host_name: &str) -> MonitorSnapshot {
    MonitorSnapshot {
        host_name: host_name.into(),
        cpu_load: CpuLoad {
            avg_1: 0.5,
            avg_3: 0.25,
            avg_15: 0.125,
        },
        cpu_stat: vec![CpuStat {
            cpu_name: "cpu".into(),
            cpu_percent: 60.0,
            usr_percent: 40.0,
            system_percent: 20.0,
            nice_percent: 0.0,
            idle_percent: 40.0,
            io_wait_percent: 0.0,
            irq_percent: 0.0,
            soft_irq_percent: 0.0,
        }],
        soft_irq: vec![SoftIrq {
            cpu_name: "CPU0".into(),
            timer: 250.0,
            sched: 125.0,
            ..Default::default()
        }],
        mem_info: MemInfo {
            used_percent: 50.0,
            total: 16.0,
            avail: 8.0,
            ..Default::default()
        },
        net_info: vec![NetInfo {
            name: "eth0".into(),
            send_rate: 12.5,
            rcv_rate: 100.0,
            send_packets_rate: 8.0,
            rcv_packets_rate: 64.0,
            ..Default::default()
        }],
    }
}
