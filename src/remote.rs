//! Remote spreadsheet service.
//!
//! Commands only see the [`SpreadsheetClient`] trait; the Google Drive client is
//! constructed by the CLI from the project's stored credentials.

use crate::project::Project;
use anyhow::{Context, Result, anyhow, bail};
use reqwest::Url;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_DRIVE_API_URL: &str = "https://www.googleapis.com/drive/v3";
pub const ACCESS_TOKEN_ENV: &str = "COGS_ACCESS_TOKEN";
pub const DRIVE_API_URL_ENV: &str = "COGS_DRIVE_API_URL";

/// Failure reported by the remote service. Displays as the response body.
#[derive(Debug, Error)]
#[error("{body}")]
pub struct RemoteError {
    pub status: Option<u16>,
    pub body: String,
}

impl RemoteError {
    pub fn new(status: Option<u16>, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub trait SpreadsheetClient {
    fn delete_spreadsheet(&self, spreadsheet_id: &str) -> Result<(), RemoteError>;
}

impl<C: SpreadsheetClient + ?Sized> SpreadsheetClient for Box<C> {
    fn delete_spreadsheet(&self, spreadsheet_id: &str) -> Result<(), RemoteError> {
        (**self).delete_spreadsheet(spreadsheet_id)
    }
}

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(alias = "token")]
    access_token: Option<String>,
}

pub struct GoogleDriveClient {
    http: reqwest::blocking::Client,
    base_url: Url,
    access_token: String,
}

impl GoogleDriveClient {
    pub fn new(access_token: impl Into<String>, base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid Drive API URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            bail!("Drive API URL '{base_url}' cannot carry a path");
        }
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("cogs/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url,
            access_token: access_token.into(),
        })
    }

    /// Build a client from the `Credentials` config value, a path (relative to
    /// the project root) to a JSON file holding an OAuth `access_token`.
    /// `COGS_ACCESS_TOKEN` takes precedence over the file when set.
    pub fn from_credentials(project: &Project, credentials: &str) -> Result<Self> {
        let env_token = std::env::var(ACCESS_TOKEN_ENV).ok();
        let token = resolve_access_token(&project.resolve_source(credentials), env_token)?;
        let base_url =
            std::env::var(DRIVE_API_URL_ENV).unwrap_or_else(|_| DEFAULT_DRIVE_API_URL.to_string());
        Self::new(token, &base_url)
    }

    /// `{base}/files/{id}`, with the id escaped as a single path segment.
    fn file_url(&self, file_id: &str) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RemoteError::new(None, format!("'{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push("files")
            .push(file_id);
        Ok(url)
    }
}

impl SpreadsheetClient for GoogleDriveClient {
    fn delete_spreadsheet(&self, spreadsheet_id: &str) -> Result<(), RemoteError> {
        let url = self.file_url(spreadsheet_id)?;
        tracing::debug!(%url, "deleting remote spreadsheet");

        let response = self
            .http
            .delete(url)
            .bearer_auth(&self.access_token)
            .send()
            .map_err(|e| RemoteError::new(None, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response
            .text()
            .unwrap_or_else(|e| format!("HTTP {status} (body unavailable: {e})"));
        Err(RemoteError::new(Some(status.as_u16()), body))
    }
}

fn resolve_access_token(credentials_path: &Path, env_token: Option<String>) -> Result<String> {
    if let Some(token) = env_token.filter(|t| !t.trim().is_empty()) {
        return Ok(token);
    }

    let raw = fs::read_to_string(credentials_path).with_context(|| {
        format!(
            "failed to read credentials '{}'",
            credentials_path.display()
        )
    })?;
    let parsed: CredentialsFile = serde_json::from_str(&raw).with_context(|| {
        format!(
            "credentials '{}' are not valid JSON",
            credentials_path.display()
        )
    })?;
    parsed
        .access_token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            anyhow!(
                "credentials '{}' do not contain an access_token",
                credentials_path.display()
            )
        })
}
