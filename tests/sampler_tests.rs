// Sampler and agent tests against a temporary proc tree

mod common;

use procwatch::agent::{AgentDeps, LoopConfig, spawn};
use procwatch::relay::SnapshotRelay;
use procwatch::sampler::Sampler;
use std::sync::Arc;
use tokio::time::{Duration, Instant, sleep};

fn write_round(root: &std::path::Path, round: u64) {
    let (stat, rcv, snd) = if round == 0 {
        (common::STAT_T0, 1_000_000, 500_000)
    } else {
        (common::STAT_T1, 1_102_400, 551_200)
    };
    common::write_proc_root(
        root,
        &common::stat(stat, stat, stat),
        &common::net_dev(rcv, snd),
        &common::softirqs(round + 1),
    );
}

#[tokio::test]
async fn first_round_has_gauges_only_second_round_has_rates() {
    let dir = tempfile::TempDir::new().unwrap();
    write_round(dir.path(), 0);
    let mut sampler = Sampler::new(dir.path(), "test-host");

    let first = sampler.sample_round().await;
    assert_eq!(first.host_name, "test-host");
    assert_eq!(first.cpu_load.avg_1, 0.52);
    assert_eq!(first.mem_info.used_percent, 50.0);
    assert!(first.cpu_stat.is_empty());
    assert!(first.net_info.is_empty());
    assert!(first.soft_irq.is_empty());

    write_round(dir.path(), 1);
    sleep(Duration::from_millis(5)).await;
    let second = sampler.sample_round().await;
    assert_eq!(second.cpu_stat.len(), 3);
    assert!((second.cpu_stat[0].cpu_percent - 60.0).abs() < 1e-9);
    assert_eq!(second.net_info.len(), 2);
    assert!(second.net_info.iter().any(|n| n.name == "eth0" && n.rcv_rate > 0.0));
    assert_eq!(second.soft_irq.len(), 2);
}

#[tokio::test]
async fn missing_source_leaves_family_at_default() {
    let dir = tempfile::TempDir::new().unwrap();
    write_round(dir.path(), 0);
    std::fs::remove_file(dir.path().join("loadavg")).unwrap();
    std::fs::write(dir.path().join("meminfo"), "garbage\n").unwrap();
    let mut sampler = Sampler::new(dir.path(), "h");

    let snapshot = sampler.sample_round().await;
    assert_eq!(snapshot.cpu_load, Default::default());
    assert_eq!(snapshot.mem_info, Default::default());

    write_round(dir.path(), 1);
    sleep(Duration::from_millis(5)).await;
    let snapshot = sampler.sample_round().await;
    assert_eq!(snapshot.cpu_stat.len(), 3);
    assert_eq!(snapshot.cpu_load.avg_15, 0.59);
}

#[tokio::test]
async fn empty_proc_root_yields_default_families() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut sampler = Sampler::new(dir.path().join("nope"), "h");
    let snapshot = sampler.sample_round().await;
    assert_eq!(snapshot, procwatch::models::MonitorSnapshot::new("h"));
}

#[tokio::test]
async fn agent_pushes_rounds_until_shutdown() {
    let dir = tempfile::TempDir::new().unwrap();
    write_round(dir.path(), 0);
    let relay = Arc::new(SnapshotRelay::new(4));
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let handle = spawn(
        AgentDeps {
            sampler: Sampler::new(dir.path(), "agent-host"),
            sink: relay.clone(),
            shutdown_rx,
        },
        LoopConfig {
            sample_interval_ms: 20,
            stats_log_interval_secs: 60,
        },
    );

    let deadline = Instant::now() + Duration::from_secs(3);
    while relay.pushes_total() < 2 {
        assert!(Instant::now() < deadline, "agent did not push twice");
        sleep(Duration::from_millis(10)).await;
    }
    let _ = shutdown_tx.send(());
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("agent stops on shutdown")
        .unwrap();

    let latest = relay.pull().await;
    assert_eq!(latest.host_name, "agent-host");
    assert_eq!(latest.mem_info.total, 16.0);
}
