//! Expiry samples: `(app_name, secret_name) -> unix seconds`.

use crate::directory::{Application, PasswordCredential};

/// Label used when an application has no display name.
pub const UNNAMED_APP: &str = "Unnamed app";
/// Label used when a password credential has no display name.
pub const UNNAMED_CREDENTIAL: &str = "Unnamed credential";

/// Label set of one gauge series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleKey {
    pub app_name: String,
    pub secret_name: String,
}

impl SampleKey {
    pub fn new(app_name: impl Into<String>, secret_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            secret_name: secret_name.into(),
        }
    }
}

/// One observed credential, ready to be written to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirySample {
    pub key: SampleKey,
    /// Seconds since the Unix epoch.
    pub expires_at: i64,
}

impl ExpirySample {
    /// Derive the sample for `cred` owned by `app`.
    /// Returns `None` when the credential carries no expiry.
    pub fn derive(app: &Application, cred: &PasswordCredential) -> Option<Self> {
        let expires_at = cred.expires_at_unix()?;
        Some(Self {
            key: SampleKey::new(app.name(), cred.name()),
            expires_at,
        })
    }
}

/// Blank names count as missing.
fn name_or<'a>(name: Option<&'a str>, placeholder: &'static str) -> &'a str {
    match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => placeholder,
    }
}

impl Application {
    /// Display name, or [`UNNAMED_APP`].
    pub fn name(&self) -> &str {
        name_or(self.display_name.as_deref(), UNNAMED_APP)
    }
}

impl PasswordCredential {
    /// Display name, or [`UNNAMED_CREDENTIAL`].
    pub fn name(&self) -> &str {
        name_or(self.display_name.as_deref(), UNNAMED_CREDENTIAL)
    }
}
