// /proc/net/dev: cumulative per-interface byte/packet counters -> throughput.

use std::time::Instant;
use tracing::debug;

use super::{RecordReader, SampleStore, counter_rate, elapsed_secs};
use crate::models::NetInfo;

/// Counters of one interface line. Receive fields sit at positions 1-4, transmit
/// fields at 9-12; fifo/frame/compressed/multicast columns are not kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub rcv_bytes: u64,
    pub rcv_packets: u64,
    pub err_in: u64,
    pub drop_in: u64,
    pub snd_bytes: u64,
    pub snd_packets: u64,
    pub err_out: u64,
    pub drop_out: u64,
}

impl NetCounters {
    /// `record` is a whole interface line, name token included.
    pub fn parse(record: &[&str]) -> Option<Self> {
        let field = |i: usize| record.get(i)?.parse::<u64>().ok();
        Some(Self {
            rcv_bytes: field(1)?,
            rcv_packets: field(2)?,
            err_in: field(3)?,
            drop_in: field(4)?,
            snd_bytes: field(9)?,
            snd_packets: field(10)?,
            err_out: field(11)?,
            drop_out: field(12)?,
        })
    }
}

/// Minimum tokens for a line to count as an interface record.
const MIN_RECORD_LEN: usize = 10;

#[derive(Debug, Default)]
pub struct NetCollector {
    store: SampleStore<NetCounters>,
}

impl NetCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &SampleStore<NetCounters> {
        &self.store
    }

    pub fn update(&mut self, text: &str, now: Instant) -> Vec<NetInfo> {
        let mut out = Vec::new();
        for record in RecordReader::new(text) {
            let record = split_glued_name(record);
            let Some(name) = record.first().and_then(|t| t.strip_suffix(':')) else {
                continue;
            };
            if record.len() < MIN_RECORD_LEN {
                continue;
            }
            let Some(counters) = NetCounters::parse(&record) else {
                debug!(family = "net_info", iface = %name, "skipping malformed interface line");
                continue;
            };
            if let Some((prev, prev_at)) = self.store.upsert(name, counters, now)
                && let Some(elapsed) = elapsed_secs(now, prev_at)
                && let Some(info) = rates(name, &prev, &counters, elapsed)
            {
                out.push(info);
            }
        }
        out
    }
}

/// The kernel prints `%6s:%8llu`, so a receive-bytes counter wider than eight digits
/// ends up glued to the name (`eth0:123456789`). Split it back into two tokens.
fn split_glued_name(mut record: Vec<&str>) -> Vec<&str> {
    if let Some(first) = record.first().copied()
        && let Some(idx) = first.find(':')
        && idx + 1 < first.len()
    {
        let (name, rest) = first.split_at(idx + 1);
        record[0] = name;
        record.insert(1, rest);
    }
    record
}

/// None when any tracked counter went backwards (wrap or interface reset).
fn rates(name: &str, prev: &NetCounters, curr: &NetCounters, elapsed: f64) -> Option<NetInfo> {
    let rate = |new: u64, old: u64| counter_rate(new, old, elapsed);
    Some(NetInfo {
        name: name.to_string(),
        send_rate: rate(curr.snd_bytes, prev.snd_bytes)? / 1024.0,
        rcv_rate: rate(curr.rcv_bytes, prev.rcv_bytes)? / 1024.0,
        send_packets_rate: rate(curr.snd_packets, prev.snd_packets)?,
        rcv_packets_rate: rate(curr.rcv_packets, prev.rcv_packets)?,
        err_in_rate: rate(curr.err_in, prev.err_in)?,
        drop_in_rate: rate(curr.drop_in, prev.drop_in)?,
        err_out_rate: rate(curr.err_out, prev.err_out)?,
        drop_out_rate: rate(curr.drop_out, prev.drop_out)?,
    })
}
