//! The transactions that make up the fetch-download-extract pipeline.

mod download_and_extract_archive;
mod download_artifact;
mod extract_archive;
mod fetch_artifacts;
mod fetch_latest_artifact;
mod select_artifact;

pub use download_and_extract_archive::*;
pub use download_artifact::*;
pub use extract_archive::*;
pub use fetch_artifacts::*;
pub use fetch_latest_artifact::*;
pub use select_artifact::*;
