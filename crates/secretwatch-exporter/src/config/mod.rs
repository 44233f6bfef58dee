//! Exporter configuration: CLI flags, required environment, optional YAML file
//! (strict parsing).

pub mod cli;
pub mod credentials;
pub mod schema;

use std::fs;
use std::path::Path;

use secretwatch_core::error::{MonitorError, Result};

pub use cli::Args;
pub use credentials::ClientCredentials;
pub use schema::{DirectorySection, ExporterConfig, ExporterSection, RefreshSection, StaleSeriesPolicy};

pub fn load_from_file(path: &Path) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path).map_err(|e| {
        MonitorError::Config(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| MonitorError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// File config when `--config` is given, validated defaults otherwise.
pub fn load(args: &Args) -> Result<ExporterConfig> {
    match &args.config {
        Some(path) => load_from_file(path),
        None => {
            let cfg = ExporterConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }
}
