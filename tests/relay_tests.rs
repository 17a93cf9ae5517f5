// Relay tests: single slot, last write wins

mod common;

use procwatch::models::MonitorSnapshot;
use procwatch::relay::SnapshotRelay;
use std::sync::Arc;

#[tokio::test]
async fn pull_before_any_push_is_default() {
    let relay = SnapshotRelay::new(4);
    assert_eq!(relay.pull().await, MonitorSnapshot::default());
    assert_eq!(relay.pushes_total(), 0);
}

#[tokio::test]
async fn last_push_wins() {
    let relay = SnapshotRelay::new(4);
    relay.push(common::sample_snapshot("a")).await;
    relay.push(common::sample_snapshot("b")).await;
    let got = relay.pull().await;
    assert_eq!(got, common::sample_snapshot("b"));
    assert_eq!(relay.pushes_total(), 2);
    // Pulls do not consume.
    assert_eq!(relay.pull().await.host_name, "b");
}

#[tokio::test]
async fn subscribers_see_each_push() {
    let relay = SnapshotRelay::new(4);
    let mut rx = relay.subscribe();
    relay.push(common::sample_snapshot("a")).await;
    relay.push(common::sample_snapshot("b")).await;
    assert_eq!(rx.recv().await.unwrap().host_name, "a");
    assert_eq!(rx.recv().await.unwrap().host_name, "b");
}

#[tokio::test]
async fn zero_capacity_is_clamped() {
    let relay = SnapshotRelay::new(0);
    let mut rx = relay.subscribe();
    relay.push(common::sample_snapshot("a")).await;
    assert_eq!(rx.recv().await.unwrap().host_name, "a");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_pushes_stream_in_stored_order() {
    let relay = Arc::new(SnapshotRelay::new(64));
    let mut rx = relay.subscribe();
    let handles: Vec<_> = (0..32)
        .map(|i| {
            let relay = relay.clone();
            tokio::spawn(async move { relay.push(common::sample_snapshot(&format!("h{i}"))).await })
        })
        .collect();
    for h in handles {
        h.await.unwrap();
    }

    let mut last = None;
    while let Ok(s) = rx.try_recv() {
        last = Some(s.host_name);
    }
    assert_eq!(last, Some(relay.pull().await.host_name));
    assert_eq!(relay.pushes_total(), 32);
}
