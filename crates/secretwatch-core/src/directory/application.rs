//! Directory listing payload (`GET /applications`).
//!
//! Only the fields the exporter reads are modelled; everything else the
//! directory returns is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// One page of the application listing. `next_link` is kept for logging only.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Vec<Application>,
    #[serde(rename = "@odata.nextLink", default)]
    pub next_link: Option<String>,
}

/// Application registration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Object id assigned by the directory.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password_credentials: Vec<PasswordCredential>,
}

/// Password credential (client secret). The secret value itself is never
/// returned by the listing call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCredential {
    #[serde(default)]
    pub key_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub start_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date_time: Option<DateTime<Utc>>,
}

impl PasswordCredential {
    /// Expiry as whole seconds since the Unix epoch.
    pub fn expires_at_unix(&self) -> Option<i64> {
        self.end_date_time.map(|t| t.timestamp())
    }
}

/// `null` decodes like a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
