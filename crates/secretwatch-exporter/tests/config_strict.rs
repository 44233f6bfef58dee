#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use secretwatch_core::error::{ErrorClass, MonitorError};
use secretwatch_exporter::config::{self, StaleSeriesPolicy};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
refresh:
  fetch_timeout: 30000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.class(), ErrorClass::Configuration);
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.exporter.listen, "0.0.0.0:2112");
    assert_eq!(cfg.refresh.fetch_timeout(), Duration::from_secs(30));
    assert_eq!(cfg.refresh.stale_series, StaleSeriesPolicy::Prune);
    assert_eq!(cfg.directory.graph_endpoint, "https://graph.microsoft.com");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
exporter:
  listen: "127.0.0.1:9100"
refresh:
  fetch_timeout_ms: 5000
  stale_series: retain
directory:
  authority_host: "https://login.microsoftonline.us"
  graph_endpoint: "https://graph.microsoft.us"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.exporter.listen_addr().unwrap().port(), 9100);
    assert_eq!(cfg.refresh.stale_series, StaleSeriesPolicy::Retain);
    assert_eq!(cfg.directory.authority_host, "https://login.microsoftonline.us");
}

#[test]
fn rejects_out_of_range_values() {
    let err = config::load_from_str("version: 2\n").unwrap_err();
    assert!(matches!(err, MonitorError::UnsupportedVersion));

    let err = config::load_from_str("version: 1\nexporter:\n  listen: \"port 2112\"\n").unwrap_err();
    assert!(matches!(err, MonitorError::Config(_)));

    let err =
        config::load_from_str("version: 1\nrefresh:\n  fetch_timeout_ms: 10\n").unwrap_err();
    assert!(matches!(err, MonitorError::Config(_)));

    let err = config::load_from_str("version: 1\ndirectory:\n  graph_endpoint: \"graph\"\n")
        .unwrap_err();
    assert!(matches!(err, MonitorError::Config(_)));
}
