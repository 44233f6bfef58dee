//! Shared error type across secretwatch crates.

use thiserror::Error;

/// Coarse error classes (stable, used for exit decisions and log fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Missing/invalid environment, flags or config file.
    Configuration,
    /// The directory adapter could not be built.
    ClientConstruction,
    /// A refresh cycle could not fetch directory state.
    Fetch,
    /// The metrics listener could not be bound or stopped serving.
    Server,
}

impl ErrorClass {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorClass::Configuration => "CONFIGURATION",
            ErrorClass::ClientConstruction => "CLIENT_CONSTRUCTION",
            ErrorClass::Fetch => "FETCH",
            ErrorClass::Server => "SERVER",
        }
    }

    /// Fatal classes stop the process; fetch errors only abandon one cycle.
    pub fn is_fatal(self) -> bool {
        !matches!(self, ErrorClass::Fetch)
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("client construction failed: {0}")]
    ClientBuild(String),
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("server: {0}")]
    Server(String),
}

impl MonitorError {
    /// Map an error to its class.
    pub fn class(&self) -> ErrorClass {
        match self {
            MonitorError::MissingEnv(_)
            | MonitorError::Config(_)
            | MonitorError::UnsupportedVersion => ErrorClass::Configuration,
            MonitorError::ClientBuild(_) => ErrorClass::ClientConstruction,
            MonitorError::TokenExchange(_)
            | MonitorError::Transport(_)
            | MonitorError::Upstream { .. }
            | MonitorError::Decode(_)
            | MonitorError::Timeout(_) => ErrorClass::Fetch,
            MonitorError::Server(_) => ErrorClass::Server,
        }
    }
}
