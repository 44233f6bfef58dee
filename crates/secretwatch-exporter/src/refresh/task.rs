//! Supervised periodic refresh task.
//!
//! Lifecycle: `spawn` runs a cycle immediately, then one cycle per interval.
//! `RefreshHandle::shutdown` stops the loop (also mid-fetch or mid-sleep) and
//! joins it. Dropping the handle stops the loop too.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::refresh::RefreshEngine;

pub struct RefreshHandle {
    stop: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl RefreshHandle {
    /// Signal the loop to stop and wait for it to exit.
    pub async fn shutdown(self) {
        let _ = self.stop.send(true);
        if let Err(e) = self.join.await {
            tracing::error!(error = %e, "refresh task ended abnormally");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

/// Start the refresh loop on the current runtime.
pub fn spawn(engine: Arc<RefreshEngine>, interval: Duration) -> RefreshHandle {
    let (stop, stop_rx) = watch::channel(false);
    let join = tokio::spawn(run_loop(engine, interval, stop_rx));
    RefreshHandle { stop, join }
}

async fn run_loop(engine: Arc<RefreshEngine>, interval: Duration, mut stop: watch::Receiver<bool>) {
    tracing::info!(interval = ?interval, "refresh loop started");

    loop {
        tokio::select! {
            res = engine.run_cycle() => match res {
                Ok(report) => tracing::info!(
                    applications = report.applications,
                    credentials = report.credentials,
                    skipped = report.skipped,
                    removed = report.removed,
                    series = engine.registry().len(),
                    "refresh cycle complete"
                ),
                Err(e) => tracing::error!(
                    class = e.class().as_str(),
                    error = %e,
                    "refresh cycle failed; keeping previous values"
                ),
            },
            _ = stop.changed() => break,
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = stop.changed() => break,
        }
    }

    tracing::info!("refresh loop stopped");
}
