use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Export Entra application secret expiry times as Prometheus gauges.
///
/// Credentials are read from CLIENT_ID, TENANT_ID and CLIENT_SECRET.
#[derive(Debug, Parser)]
#[command(name = "secretwatch-exporter", version, about)]
pub struct Args {
    /// Interval at which secrets are reloaded from the directory.
    #[arg(long, default_value = "1h", value_parser = parse_interval)]
    pub refresh_interval: Duration,

    /// Optional YAML file with listener, timeout and directory settings.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let d = humantime::parse_duration(s).map_err(|e| e.to_string())?;
    if d.is_zero() {
        return Err("refresh interval must be greater than zero".into());
    }
    Ok(d)
}
