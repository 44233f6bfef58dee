//! Client-credentials read from the process environment.

use std::fmt;

use secretwatch_core::error::{MonitorError, Result};

pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
pub const ENV_TENANT_ID: &str = "TENANT_ID";
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";

/// Application (client) credentials used for the client-credentials grant.
#[derive(Clone)]
pub struct ClientCredentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl ClientCredentials {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(MonitorError::MissingEnv(key))
        };

        let creds = Self {
            tenant_id: get(ENV_TENANT_ID)?,
            client_id: get(ENV_CLIENT_ID)?,
            client_secret: get(ENV_CLIENT_SECRET)?,
        };
        creds.validate()?;
        Ok(creds)
    }

    /// Tenant ids are GUIDs or domain names; anything else would end up in the
    /// token URL path.
    fn validate(&self) -> Result<()> {
        let ok = self
            .tenant_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        if !ok {
            return Err(MonitorError::Config(format!(
                "{ENV_TENANT_ID} contains invalid characters (expected a GUID or domain name)"
            )));
        }
        Ok(())
    }
}
