//! Client-credentials token exchange with an in-memory cache.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;

use secretwatch_core::error::{MonitorError, Result};

use crate::config::ClientCredentials;

/// Tokens are refreshed this long before they expire.
const EXPIRY_SKEW: Duration = Duration::from_secs(60);

/// Upstream error bodies are truncated to this many bytes in errors.
pub(crate) const MAX_ERROR_BODY: usize = 500;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: String,
}

struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Exchanges client credentials for bearer tokens and reuses them until
/// shortly before expiry.
pub struct TokenSource {
    http: reqwest::Client,
    token_url: String,
    scope: String,
    creds: ClientCredentials,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    pub fn new(
        http: reqwest::Client,
        authority_host: &str,
        graph_endpoint: &str,
        creds: ClientCredentials,
    ) -> Self {
        Self {
            http,
            token_url: format!(
                "{}/{}/oauth2/v2.0/token",
                authority_host.trim_end_matches('/'),
                creds.tenant_id
            ),
            scope: format!("{}/.default", graph_endpoint.trim_end_matches('/')),
            creds,
            cached: Mutex::new(None),
        }
    }

    /// Current bearer token, exchanging a new one when needed.
    pub async fn bearer(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;
        if let Some(t) = cached.as_ref() {
            if Instant::now() < t.refresh_at {
                return Ok(t.value.clone());
            }
        }

        let fresh = self.exchange().await?;
        let value = fresh.access_token.clone();
        let lifetime = Duration::from_secs(fresh.expires_in).saturating_sub(EXPIRY_SKEW);
        *cached = Some(CachedToken {
            value: fresh.access_token,
            refresh_at: Instant::now() + lifetime,
        });
        Ok(value)
    }

    /// Forget the cached token (after the directory rejected it).
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    async fn exchange(&self) -> Result<TokenResponse> {
        tracing::debug!(url = %self.token_url, "exchanging client credentials");
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.creds.client_id.as_str()),
            ("client_secret", self.creds.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];
        let resp = self
            .http
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| MonitorError::TokenExchange(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MonitorError::TokenExchange(format!(
                "{}: {}",
                status.as_u16(),
                describe_token_error(&body)
            )));
        }

        resp.json::<TokenResponse>()
            .await
            .map_err(|e| MonitorError::TokenExchange(format!("invalid token response: {e}")))
    }
}

fn describe_token_error(body: &str) -> String {
    match serde_json::from_str::<TokenErrorResponse>(body) {
        Ok(e) if !e.error.is_empty() => {
            truncate(&format!("{} ({})", e.error, e.error_description))
        }
        _ => truncate(body),
    }
}

pub(crate) fn truncate(s: &str) -> String {
    if s.len() <= MAX_ERROR_BODY {
        return s.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}
