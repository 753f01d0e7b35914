use anyhow::{Context as _, Result};
use reqwest::header;
use tracing::{debug, info};

use crate::workflow::artifact::{Artifact, ArtifactList, github_api_request_builder};

/// The maximum page size the listing endpoint accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Fetches every artifact of a repository, paging through the listing endpoint
/// until no further page is indicated.
///
/// Records are accumulated in receipt order. A single failed page fails the
/// whole call; partial results are never returned.
///
/// # Errors
///
/// Returns an error naming the offending page if any listing request fails,
/// returns a non-success status, or yields an unparsable body.
pub async fn fetch_artifacts(base_url: &str, owner: &str, repo: &str) -> Result<Vec<Artifact>> {
    let url = format!("{base_url}/repos/{owner}/{repo}/actions/artifacts");

    let mut artifacts: Vec<Artifact> = Vec::new();
    let mut page: u32 = 1;
    loop {
        debug!("fetching artifacts from {url} (page {page})…");
        let response = github_api_request_builder(&url)
            .query(&[("per_page", MAX_PER_PAGE), ("page", page)])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("failed to list artifacts (page {page})"))?;

        let next = next_page(response.headers());
        let list: ArtifactList = response
            .json()
            .await
            .with_context(|| format!("failed to parse artifact listing (page {page})"))?;
        artifacts.extend(list.artifacts);

        match next {
            Some(next) => page = next,
            None => break,
        }
    }

    info!("fetched {} artifacts from {url}", artifacts.len());
    Ok(artifacts)
}

/// Extracts the next page number from a `Link` response header, the listing
/// endpoint's pagination cursor. Returns [`None`] once no `rel="next"` segment
/// is present.
fn next_page(headers: &header::HeaderMap) -> Option<u32> {
    let link = headers.get(header::LINK)?.to_str().ok()?;
    link.split(',').find_map(|segment| {
        let (url, params) = segment.split_once(';')?;
        if !params.contains(r#"rel="next""#) {
            return None;
        }
        let url = url.trim().trim_start_matches('<').trim_end_matches('>');
        let (_, query) = url.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == "page").then(|| value.parse().ok()).flatten()
        })
    })
}
