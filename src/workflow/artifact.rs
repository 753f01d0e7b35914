//! Artifacts from GitHub REST API and related functions.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use reqwest::{RequestBuilder, header};
use serde::Deserialize;

use crate::{env::GITHUB_TOKEN, workflow::WorkflowRun};

/// The base URL of GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Represents one page of the artifact listing from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct ArtifactList {
    pub total_count: u64,
    pub artifacts: Vec<Artifact>,
}

/// Represents an artifact from GitHub REST API.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub size_in_bytes: u64,
    pub url: String,
    pub archive_download_url: String,
    pub expired: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub digest: Option<String>,
    pub workflow_run: Option<WorkflowRun>,
}

impl Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Builds a request for GitHub REST API.
///
/// The bearer token is attached only when [`GITHUB_TOKEN`] is non-empty;
/// otherwise the request goes out unauthenticated.
pub fn github_api_request_builder(url: &str) -> RequestBuilder {
    let builder = reqwest::Client::new()
        .get(url)
        .header(header::ACCEPT, "application/vnd.github+json")
        .header("X-GitHub-Api-Version", "2022-11-28")
        .header(
            header::USER_AGENT,
            concat!("latest-artifact/", env!("CARGO_PKG_VERSION")),
        );

    if GITHUB_TOKEN.is_empty() {
        builder
    } else {
        builder.bearer_auth(&*GITHUB_TOKEN)
    }
}
