// Wire shape of the snapshot model

mod common;

use procwatch::models::*;
use procwatch::wire::{WINCODE_CONTENT_TYPE, decode_snapshot, encode_wincode};

#[test]
fn snapshot_json_uses_snake_case_keys() {
    let json = serde_json::to_value(common::sample_snapshot("h")).unwrap();
    let obj = json.as_object().unwrap();
    for key in ["host_name", "cpu_load", "cpu_stat", "soft_irq", "mem_info", "net_info"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert!(json["cpu_load"].get("avg_15").is_some());
    assert!(json["cpu_stat"][0].get("io_wait_percent").is_some());
    assert!(json["soft_irq"][0].get("irq_poll").is_some());
    assert!(json["mem_info"].get("used_percent").is_some());
    assert!(json["net_info"][0].get("rcv_packets_rate").is_some());
}

#[test]
fn default_snapshot_is_empty() {
    let s = MonitorSnapshot::default();
    assert_eq!(s.host_name, "");
    assert!(s.cpu_stat.is_empty() && s.soft_irq.is_empty() && s.net_info.is_empty());
    assert_eq!(s.mem_info.total, 0.0);
}

#[test]
fn net_info_error_rates_default_when_absent() {
    let json = r#"{"name":"eth0","send_rate":1.0,"rcv_rate":2.0,"send_packets_rate":3.0,"rcv_packets_rate":4.0}"#;
    let n: NetInfo = serde_json::from_str(json).unwrap();
    assert_eq!(n.rcv_rate, 2.0);
    assert_eq!(n.err_in_rate, 0.0);
    assert_eq!(n.drop_out_rate, 0.0);
}

#[test]
fn wincode_body_decodes_to_same_snapshot() {
    let s = common::sample_snapshot("bin");
    let body = encode_wincode(&s).unwrap();
    let decoded = decode_snapshot(Some(WINCODE_CONTENT_TYPE), &body).unwrap();
    assert_eq!(decoded, s);
}

#[test]
fn untyped_body_is_treated_as_json() {
    let s = common::sample_snapshot("json");
    let body = serde_json::to_vec(&s).unwrap();
    assert_eq!(decode_snapshot(None, &body).unwrap(), s);
    assert!(decode_snapshot(Some("application/json"), b"{").is_err());
}
