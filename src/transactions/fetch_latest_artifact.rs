use std::path::Path;

use anyhow::Result;

use crate::{
    transactions::{download_and_extract_archive, fetch_artifacts, select_latest},
    workflow::artifact::Artifact,
};

/// Runs the whole pipeline: enumerate every artifact of the repository, pick
/// the most recently created one, download its archive and extract it to a
/// destination. Returns the selected artifact.
///
/// # Errors
///
/// Returns the first error of any stage; later stages are not attempted.
pub async fn fetch_latest_artifact<P>(
    base_url: &str,
    owner: &str,
    repo: &str,
    path: P,
) -> Result<Artifact>
where
    P: AsRef<Path> + Send + Sync,
{
    let artifacts = fetch_artifacts(base_url, owner, repo).await?;
    let artifact = select_latest(artifacts)?;
    download_and_extract_archive(base_url, owner, repo, &artifact, path).await?;
    Ok(artifact)
}
