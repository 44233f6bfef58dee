//! Refresh loop lifecycle on a paused clock.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod support;

use std::sync::Arc;
use std::time::Duration;

use secretwatch_core::directory::SampleKey;
use secretwatch_core::error::MonitorError;
use secretwatch_exporter::config::StaleSeriesPolicy;
use secretwatch_exporter::refresh;

use support::{app, cred, engine, payroll, ScriptedDirectory, Step};

const INTERVAL: Duration = Duration::from_secs(60);

#[tokio::test(start_paused = true)]
async fn runs_immediately_then_every_interval() {
    let client = ScriptedDirectory::new(vec![Step::Apps(vec![payroll()])]);
    let (engine, registry) = engine(Arc::clone(&client), StaleSeriesPolicy::Prune);

    let handle = refresh::spawn(engine, INTERVAL);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(client.calls(), 1);
    assert_eq!(registry.len(), 2);

    tokio::time::sleep(INTERVAL).await;
    assert_eq!(client.calls(), 2);

    tokio::time::sleep(INTERVAL).await;
    assert_eq!(client.calls(), 3);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn failures_do_not_stop_the_loop() {
    let client = ScriptedDirectory::new(vec![
        Step::Apps(vec![payroll()]),
        Step::Fail(MonitorError::Transport("connection reset".into())),
        Step::Fail(MonitorError::TokenExchange("401: invalid_client".into())),
        Step::Apps(vec![app(
            "app-1",
            Some("Payroll"),
            vec![cred(Some("k1"), "2027-01-01T00:00:00Z")],
        )]),
    ]);
    let (engine, registry) = engine(Arc::clone(&client), StaleSeriesPolicy::Prune);
    let handle = refresh::spawn(engine, INTERVAL);

    tokio::time::sleep(Duration::from_secs(1)).await;
    let first = registry.snapshot();
    assert_eq!(first.len(), 2);

    // Two failing cycles, each after a full interval.
    tokio::time::sleep(INTERVAL).await;
    assert_eq!(client.calls(), 2);
    assert_eq!(registry.snapshot(), first);
    assert!(!handle.is_finished());

    tokio::time::sleep(INTERVAL).await;
    assert_eq!(client.calls(), 3);
    assert_eq!(registry.snapshot(), first);

    // Listing recovers with a rotated secret.
    tokio::time::sleep(INTERVAL).await;
    assert_eq!(client.calls(), 4);
    assert_eq!(
        registry.snapshot(),
        vec![(SampleKey::new("Payroll", "k1"), 1_798_761_600)]
    );

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_interrupts_sleep_and_fetch() {
    let client = ScriptedDirectory::new(vec![Step::Apps(vec![]), Step::Hang]);
    let (engine, _registry) = engine(Arc::clone(&client), StaleSeriesPolicy::Prune);

    // Stop while sleeping.
    let handle = refresh::spawn(Arc::clone(&engine), INTERVAL);
    tokio::time::sleep(Duration::from_secs(1)).await;
    handle.shutdown().await;
    assert_eq!(client.calls(), 1);

    // Stop while the fetch hangs.
    let handle = refresh::spawn(engine, INTERVAL);
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(client.calls(), 2);
    handle.shutdown().await;
}
