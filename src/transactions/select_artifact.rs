use anyhow::{Result, bail};
use tracing::info;

use crate::workflow::artifact::Artifact;

/// Picks the most recently created artifact out of a collection.
///
/// The sort is stable, so two artifacts sharing the newest timestamp resolve
/// to whichever was enumerated first. Artifacts without a creation timestamp
/// sort last.
///
/// # Errors
///
/// Returns an error if the collection is empty.
pub fn select_latest(mut artifacts: Vec<Artifact>) -> Result<Artifact> {
    if artifacts.is_empty() {
        bail!("no artifacts found");
    }

    artifacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let artifact = artifacts.swap_remove(0);
    info!("selected artifact {artifact}, created at {:?}", artifact.created_at);
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn artifact(id: u64, created_at: Option<&str>) -> Artifact {
        Artifact {
            id,
            node_id: format!("node-{id}"),
            name: format!("artifact-{id}"),
            size_in_bytes: 64,
            url: format!("https://api.github.com/repos/o/r/actions/artifacts/{id}"),
            archive_download_url: format!(
                "https://api.github.com/repos/o/r/actions/artifacts/{id}/zip"
            ),
            expired: false,
            created_at: created_at.map(|ts| ts.parse::<DateTime<Utc>>().unwrap()),
            expires_at: None,
            updated_at: None,
            digest: None,
            workflow_run: None,
        }
    }

    #[test]
    fn picks_the_newest_regardless_of_input_order() {
        let newest = artifact(3, Some("2024-03-05T00:00:00Z"));
        let orders: [Vec<Artifact>; 3] = [
            vec![
                artifact(1, Some("2024-03-01T00:00:00Z")),
                artifact(2, Some("2024-03-03T00:00:00Z")),
                newest.clone(),
            ],
            vec![
                newest.clone(),
                artifact(1, Some("2024-03-01T00:00:00Z")),
                artifact(2, Some("2024-03-03T00:00:00Z")),
            ],
            vec![
                artifact(2, Some("2024-03-03T00:00:00Z")),
                newest.clone(),
                artifact(1, Some("2024-03-01T00:00:00Z")),
            ],
        ];

        for artifacts in orders {
            assert_eq!(select_latest(artifacts).unwrap().id, 3);
        }
    }

    #[test]
    fn equal_timestamps_keep_enumeration_order() {
        let artifacts = vec![
            artifact(7, Some("2024-03-05T00:00:00Z")),
            artifact(8, Some("2024-03-05T00:00:00Z")),
            artifact(1, Some("2024-01-01T00:00:00Z")),
        ];
        assert_eq!(select_latest(artifacts).unwrap().id, 7);
    }

    #[test]
    fn missing_timestamps_sort_last() {
        let artifacts = vec![
            artifact(9, None),
            artifact(2, Some("2024-01-01T00:00:00Z")),
        ];
        assert_eq!(select_latest(artifacts).unwrap().id, 2);
    }

    #[test]
    fn an_empty_collection_is_an_error() {
        let err = select_latest(Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "no artifacts found");
    }
}
