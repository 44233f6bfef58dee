use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use secretwatch_core::error::{MonitorError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub refresh: RefreshSection,

    #[serde(default)]
    pub directory: DirectorySection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
            refresh: RefreshSection::default(),
            directory: DirectorySection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MonitorError::UnsupportedVersion);
        }

        self.exporter.validate()?;
        self.refresh.validate()?;
        self.directory.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            MonitorError::Config(format!(
                "exporter.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

/// What happens to series whose credential vanished from the latest listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleSeriesPolicy {
    /// Reconcile the registry to the latest successful cycle.
    #[default]
    Prune,
    /// Keep last-known values forever.
    Retain,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshSection {
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    #[serde(default)]
    pub stale_series: StaleSeriesPolicy,
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: default_fetch_timeout_ms(),
            stale_series: StaleSeriesPolicy::default(),
        }
    }
}

impl RefreshSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=300000).contains(&self.fetch_timeout_ms) {
            return Err(MonitorError::Config(
                "refresh.fetch_timeout_ms must be between 1000 and 300000".into(),
            ));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorySection {
    #[serde(default = "default_authority_host")]
    pub authority_host: String,

    #[serde(default = "default_graph_endpoint")]
    pub graph_endpoint: String,
}

impl Default for DirectorySection {
    fn default() -> Self {
        Self {
            authority_host: default_authority_host(),
            graph_endpoint: default_graph_endpoint(),
        }
    }
}

impl DirectorySection {
    pub fn validate(&self) -> Result<()> {
        for (field, url) in [
            ("directory.authority_host", &self.authority_host),
            ("directory.graph_endpoint", &self.graph_endpoint),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(MonitorError::Config(format!(
                    "{field} must be an http(s) URL"
                )));
            }
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:2112".into()
}
fn default_fetch_timeout_ms() -> u64 {
    30000
}
fn default_authority_host() -> String {
    "https://login.microsoftonline.com".into()
}
fn default_graph_endpoint() -> String {
    "https://graph.microsoft.com".into()
}
