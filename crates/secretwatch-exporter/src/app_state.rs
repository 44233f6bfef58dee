//! Shared application state for the exporter.
//!
//! The registry is owned here and handed to both the refresh engine (writer)
//! and the `/metrics` handler (reader); there is no global metric state.

use std::sync::Arc;

use crate::config::ExporterConfig;
use crate::obs::ExpiryRegistry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<ExpiryRegistry>,
}

struct AppStateInner {
    cfg: ExporterConfig,
}

impl AppState {
    pub fn new(cfg: ExporterConfig) -> Self {
        Self::with_registry(cfg, Arc::new(ExpiryRegistry::new()))
    }

    pub fn with_registry(cfg: ExporterConfig, registry: Arc<ExpiryRegistry>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            registry,
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<ExpiryRegistry> {
        Arc::clone(&self.registry)
    }
}
