//! GitHub Contents API client
//!
//! Fetches a single file at a given ref via
//! `GET /repos/{owner}/{repo}/contents/{path}?ref={ref}`.
//! Authentication is an optional bearer token (`GITHUB_TOKEN` or a PAT).

use crate::error::{Result, SourceError};
use crate::source::{FileLocation, ManifestSource};
use async_trait::async_trait;
use base64::Engine;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;

/// Default API endpoint; GitHub Enterprise sets `GITHUB_API_URL`
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("cicd-manifest/", env!("CARGO_PKG_VERSION"));

pub struct GitHubSource {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubSource {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: GITHUB_API_BASE.to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Override the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Build the contents endpoint URL (without the ref query)
    pub fn contents_url(&self, location: &FileLocation) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, location.owner, location.repo, location.path
        )
    }
}

#[async_trait]
impl ManifestSource for GitHubSource {
    fn name(&self) -> &str {
        "github"
    }

    async fn fetch(&self, location: &FileLocation) -> Result<String> {
        tracing::info!("Downloading manifest file {}", location);

        let mut request = self
            .client
            .get(self.contents_url(location))
            .query(&[("ref", location.git_ref.as_str())])
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header("X-GitHub-Api-Version", API_VERSION);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound {
                owner: location.owner.clone(),
                repo: location.repo.clone(),
                path: location.path.clone(),
                git_ref: location.git_ref.clone(),
            });
        }

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response.json().await?;
        let content = decode_content(body, &location.path)?;
        tracing::info!(bytes = content.len(), "Manifest file downloaded");

        Ok(content)
    }
}

/// Decode a contents API response body into the file text
///
/// Directories come back as a JSON array and symlinks/submodules carry a
/// different `type`; both are rejected.
pub fn decode_content(body: serde_json::Value, path: &str) -> Result<String> {
    if body.is_array() {
        return Err(SourceError::NotAFile(path.to_string()));
    }

    let content: ContentResponse =
        serde_json::from_value(body).map_err(|e| SourceError::Decode(e.to_string()))?;

    if content.kind != "file" {
        return Err(SourceError::NotAFile(path.to_string()));
    }

    match content.encoding.as_str() {
        "base64" => {
            // GitHub wraps base64 content at 60 columns
            let compact: String = content
                .content
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(compact)
                .map_err(|e| SourceError::Decode(e.to_string()))?;
            String::from_utf8(bytes).map_err(|e| SourceError::Decode(e.to_string()))
        }
        "none" => Err(SourceError::Decode(format!(
            "{} is too large for the contents API",
            path
        ))),
        other => Err(SourceError::Decode(format!(
            "unsupported encoding '{}' for {}",
            other, path
        ))),
    }
}

// ============ API Types ============

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
