//! Scripted directory client shared by integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use secretwatch_core::directory::{Application, PasswordCredential};
use secretwatch_core::error::{MonitorError, Result};
use secretwatch_exporter::config::{RefreshSection, StaleSeriesPolicy};
use secretwatch_exporter::directory::DirectoryClient;
use secretwatch_exporter::obs::ExpiryRegistry;
use secretwatch_exporter::refresh::RefreshEngine;

pub enum Step {
    Apps(Vec<Application>),
    Fail(MonitorError),
    Hang,
}

/// Replays scripted steps; once exhausted, repeats the last successful listing.
#[derive(Default)]
pub struct ScriptedDirectory {
    steps: Mutex<VecDeque<Step>>,
    last_ok: Mutex<Vec<Application>>,
    calls: AtomicUsize,
}

impl ScriptedDirectory {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectoryClient for ScriptedDirectory {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Apps(apps)) => {
                *self.last_ok.lock().unwrap() = apps.clone();
                Ok(apps)
            }
            Some(Step::Fail(e)) => Err(e),
            Some(Step::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(vec![])
            }
            None => Ok(self.last_ok.lock().unwrap().clone()),
        }
    }
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

pub fn cred(name: Option<&str>, end: &str) -> PasswordCredential {
    PasswordCredential {
        display_name: name.map(str::to_string),
        end_date_time: Some(at(end)),
        ..Default::default()
    }
}

pub fn app(id: &str, name: Option<&str>, creds: Vec<PasswordCredential>) -> Application {
    Application {
        id: id.to_string(),
        display_name: name.map(str::to_string),
        password_credentials: creds,
    }
}

pub fn payroll() -> Application {
    app(
        "app-1",
        Some("Payroll"),
        vec![
            cred(Some("k1"), "2025-01-01T00:00:00Z"),
            cred(None, "2025-06-01T00:00:00Z"),
        ],
    )
}

pub fn settings(policy: StaleSeriesPolicy) -> RefreshSection {
    RefreshSection {
        fetch_timeout_ms: 30_000,
        stale_series: policy,
    }
}

pub fn engine(
    client: Arc<ScriptedDirectory>,
    policy: StaleSeriesPolicy,
) -> (Arc<RefreshEngine>, Arc<ExpiryRegistry>) {
    let registry = Arc::new(ExpiryRegistry::new());
    let engine = RefreshEngine::new(client, Arc::clone(&registry), &settings(policy));
    (Arc::new(engine), registry)
}
