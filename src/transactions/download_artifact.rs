use anyhow::{Context as _, Result, bail};
use futures::TryStreamExt as _;
use sha2::{Digest as _, Sha256};
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt as _;
use tracing::{debug, info, warn};

use crate::workflow::artifact::{Artifact, github_api_request_builder};

/// Downloads the archive of an artifact into a temporary file.
///
/// The download endpoint answers with a redirect to a short-lived signed URL,
/// which the client follows transparently. The body is hashed while it
/// streams to disk and checked against the artifact's reported digest when
/// one is present.
///
/// The returned [`NamedTempFile`] removes the archive from disk when dropped,
/// so it disappears on every exit path of the caller.
///
/// # Errors
///
/// Returns an error if the download request, the temporary file, or any byte
/// transfer fails, or if the archive digest does not match the reported one.
pub async fn download_artifact(
    base_url: &str,
    owner: &str,
    repo: &str,
    artifact: &Artifact,
) -> Result<NamedTempFile> {
    let url = format!(
        "{base_url}/repos/{owner}/{repo}/actions/artifacts/{}/zip",
        artifact.id
    );

    debug!("requesting download from {url}…");
    let response = github_api_request_builder(&url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .with_context(|| format!("failed to request download for artifact {artifact}"))?;

    let temp = NamedTempFile::with_suffix(".zip")
        .context("failed to create a temporary archive file")?;
    let mut file = tokio::fs::File::from_std(
        temp.reopen()
            .context("failed to reopen the temporary archive file")?,
    );

    let mut hasher = Sha256::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream
        .try_next()
        .await
        .with_context(|| format!("failed to read archive bytes of artifact {artifact}"))?
    {
        hasher.update(&chunk);
        file.write_all(&chunk)
            .await
            .with_context(|| format!("failed to write archive bytes of artifact {artifact}"))?;
    }
    file.flush()
        .await
        .context("failed to flush the temporary archive file")?;

    match artifact
        .digest
        .as_deref()
        .and_then(|digest| digest.strip_prefix("sha256:"))
    {
        Some(expected) => {
            if hex::encode(hasher.finalize()) != expected {
                bail!("downloaded archive of artifact {artifact} does not match its digest");
            }
        }
        None => warn!("no usable sha256 digest reported for artifact {artifact}"),
    }

    info!("downloaded artifact {artifact}");
    Ok(temp)
}
