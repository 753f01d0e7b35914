//! Data models of GitHub Actions workflows.

use serde::Deserialize;

pub mod artifact;

/// The workflow run an artifact was produced by, as reported by GitHub REST API.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct WorkflowRun {
    pub id: u64,
    pub repository_id: u64,
    pub head_repository_id: u64,
    pub head_branch: String,
    pub head_sha: String,
}
