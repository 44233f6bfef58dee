//! Refresh engine: fetch → transform → publish.
//!
//! One cycle lists applications (bounded by the fetch timeout), derives one
//! expiry sample per password credential and writes it into the registry.
//! A failed fetch leaves the registry untouched. Under the `prune` policy a
//! successful cycle also removes series that were not observed in it.

pub mod task;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use secretwatch_core::directory::ExpirySample;
use secretwatch_core::error::{MonitorError, Result};

use crate::config::{RefreshSection, StaleSeriesPolicy};
use crate::directory::DirectoryClient;
use crate::obs::ExpiryRegistry;

pub use task::{spawn, RefreshHandle};

/// Outcome of one successful cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub applications: usize,
    /// Credentials written to the registry.
    pub credentials: usize,
    /// Credentials without an expiry.
    pub skipped: usize,
    /// Series pruned because their credential disappeared.
    pub removed: usize,
}

pub struct RefreshEngine {
    client: Arc<dyn DirectoryClient>,
    registry: Arc<ExpiryRegistry>,
    fetch_timeout: Duration,
    stale_series: StaleSeriesPolicy,
}

impl RefreshEngine {
    pub fn new(
        client: Arc<dyn DirectoryClient>,
        registry: Arc<ExpiryRegistry>,
        settings: &RefreshSection,
    ) -> Self {
        Self {
            client,
            registry,
            fetch_timeout: settings.fetch_timeout(),
            stale_series: settings.stale_series,
        }
    }

    pub fn registry(&self) -> &ExpiryRegistry {
        &self.registry
    }

    /// Run a single refresh cycle.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        let apps = tokio::time::timeout(self.fetch_timeout, self.client.list_applications())
            .await
            .map_err(|_| MonitorError::Timeout(self.fetch_timeout))??;

        let mut report = CycleReport::default();
        let mut seen = HashSet::new();

        for app in &apps {
            report.applications += 1;
            tracing::info!(
                app_id = %app.id,
                app_name = %app.name(),
                credentials = app.password_credentials.len(),
                "processing app"
            );

            for cred in &app.password_credentials {
                let Some(sample) = ExpirySample::derive(app, cred) else {
                    report.skipped += 1;
                    tracing::warn!(
                        app_id = %app.id,
                        secret_name = %cred.name(),
                        key_id = cred.key_id.as_deref().unwrap_or("-"),
                        "credential has no end date; not exported"
                    );
                    continue;
                };

                tracing::debug!(
                    app_name = %sample.key.app_name,
                    secret_name = %sample.key.secret_name,
                    expires_at = ?cred.end_date_time,
                    "credential expiry"
                );
                self.registry
                    .set(&sample.key.app_name, &sample.key.secret_name, sample.expires_at);
                seen.insert(sample.key);
                report.credentials += 1;
            }
        }

        if self.stale_series == StaleSeriesPolicy::Prune {
            report.removed = self.registry.retain(&seen);
        }

        Ok(report)
    }
}
