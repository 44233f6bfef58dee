//! Microsoft Graph application listing.

use async_trait::async_trait;
use serde::Deserialize;

use secretwatch_core::directory::{Application, ApplicationPage};
use secretwatch_core::error::{MonitorError, Result};

use crate::config::{ClientCredentials, DirectorySection};
use crate::directory::token::{truncate, TokenSource};
use crate::directory::DirectoryClient;

const APPLICATIONS_SELECT: &str = "id,displayName,passwordCredentials";

#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    error: GraphErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GraphErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

pub struct GraphDirectoryClient {
    http: reqwest::Client,
    applications_url: String,
    tokens: TokenSource,
}

impl GraphDirectoryClient {
    pub fn new(directory: &DirectorySection, creds: ClientCredentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("secretwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MonitorError::ClientBuild(e.to_string()))?;

        let graph = directory.graph_endpoint.trim_end_matches('/');
        let tokens = TokenSource::new(
            http.clone(),
            &directory.authority_host,
            graph,
            creds,
        );

        Ok(Self {
            http,
            applications_url: format!("{graph}/v1.0/applications"),
            tokens,
        })
    }
}

#[async_trait]
impl DirectoryClient for GraphDirectoryClient {
    async fn list_applications(&self) -> Result<Vec<Application>> {
        let token = self.tokens.bearer().await?;

        let resp = self
            .http
            .get(&self.applications_url)
            .query(&[("$select", APPLICATIONS_SELECT)])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| MonitorError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                self.tokens.invalidate().await;
            }
            let body = resp.text().await.unwrap_or_default();
            return Err(MonitorError::Upstream {
                status: status.as_u16(),
                message: describe_graph_error(&body),
            });
        }

        let page: ApplicationPage = resp
            .json()
            .await
            .map_err(|e| MonitorError::Decode(e.to_string()))?;

        if page.next_link.is_some() {
            tracing::debug!("listing has further pages; only the first page is exported");
        }

        Ok(page.value)
    }
}

fn describe_graph_error(body: &str) -> String {
    match serde_json::from_str::<GraphErrorBody>(body) {
        Ok(b) if !(b.error.code.is_empty() && b.error.message.is_empty()) => {
            truncate(&format!("{}: {}", b.error.code, b.error.message))
        }
        _ => truncate(body),
    }
}
