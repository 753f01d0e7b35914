use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::info;

use crate::{
    transactions::{download_artifact, extract_archive},
    workflow::artifact::Artifact,
};

/// Downloads the archive of an [`Artifact`] and extracts it to a destination.
///
/// The temporary archive is removed on every path out of this function,
/// including failed extraction.
///
/// See: [`download_artifact`], [`extract_archive`]
///
/// # Errors
///
/// Returns an error if the download or the extraction fails.
pub async fn download_and_extract_archive<P>(
    base_url: &str,
    owner: &str,
    repo: &str,
    artifact: &Artifact,
    path: P,
) -> Result<()>
where
    P: AsRef<Path> + Send + Sync,
{
    let temp = download_artifact(base_url, owner, repo, artifact).await?;

    info!("extracting artifact {artifact} to {:?}…", path.as_ref());
    extract_archive(temp.path(), &path)
        .await
        .with_context(|| format!("failed to extract artifact {artifact}"))?;
    info!("extracted artifact {artifact} to {:?}", path.as_ref());

    Ok(())
}
