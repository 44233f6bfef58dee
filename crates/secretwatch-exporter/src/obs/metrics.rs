//! Expiry gauge registry.
//!
//! One gauge family keyed by `(app_name, secret_name)`, backed by `DashMap` so
//! scrapes read concurrently with the refresh task's writes. Values are whole
//! Unix seconds held in `AtomicI64`; overwrites never take a map-wide lock.

use dashmap::DashMap;
use std::collections::HashSet;
use std::fmt::Write;
use std::sync::atomic::{AtomicI64, Ordering};

use secretwatch_core::directory::SampleKey;

/// Gauge family name.
pub const EXPIRY_METRIC: &str = "entra_secret_monitor_expire_time_seconds";

const EXPIRY_HELP: &str = "Expiry time of an application password credential as a Unix timestamp.";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct ExpiryRegistry {
    map: DashMap<SampleKey, AtomicI64>,
}

impl ExpiryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or overwrite the sample for `(app_name, secret_name)`.
    pub fn set(&self, app_name: &str, secret_name: &str, value: i64) {
        let key = SampleKey::new(app_name, secret_name);
        if let Some(g) = self.map.get(&key) {
            g.store(value, Ordering::Relaxed);
            return;
        }
        self.map
            .entry(key)
            .or_insert_with(|| AtomicI64::new(value))
            .store(value, Ordering::Relaxed);
    }

    pub fn get(&self, app_name: &str, secret_name: &str) -> Option<i64> {
        self.map
            .get(&SampleKey::new(app_name, secret_name))
            .map(|g| g.load(Ordering::Relaxed))
    }

    /// Drop every sample not in `keep`. Returns the number removed.
    pub fn retain(&self, keep: &HashSet<SampleKey>) -> usize {
        let before = self.map.len();
        self.map.retain(|k, _| keep.contains(k));
        before.saturating_sub(self.map.len())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Point-in-time copy, sorted by label set.
    pub fn snapshot(&self) -> Vec<(SampleKey, i64)> {
        let mut out: Vec<(SampleKey, i64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# HELP {} {}", EXPIRY_METRIC, EXPIRY_HELP);
        let _ = writeln!(out, "# TYPE {} gauge", EXPIRY_METRIC);
        for (key, val) in self.snapshot() {
            let _ = writeln!(
                out,
                "{}{{app_name=\"{}\",secret_name=\"{}\"}} {}",
                EXPIRY_METRIC,
                escape_label(&key.app_name),
                escape_label(&key.secret_name),
                val
            );
        }
        out
    }
}
