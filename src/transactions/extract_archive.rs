use async_zip::{
    base::read::stream::ZipFileReader,
    error::ZipError,
};
use futures::io::AsyncWriteExt as _;
use tokio_util::compat::{TokioAsyncReadCompatExt as _, TokioAsyncWriteCompatExt as _};

use std::path::{Path, PathBuf};

/// Extracts a zip archive on disk into a destination directory.
/// Entry names are sanitized per component and intermediate directories are
/// created as needed; existing files are overwritten.
///
/// # Panics
///
/// Panics if the archive reader is [`None`], which is unreachable.
///
/// # Errors
///
/// Returns a [`ZipError`] if the archive cannot be opened or fails to extract.
pub async fn extract_archive<A, P>(archive: A, path: P) -> Result<(), ZipError>
where
    A: AsRef<Path>,
    P: AsRef<Path> + Send + Sync,
{
    tokio::fs::create_dir_all(&path).await?;

    let file = tokio::fs::File::open(&archive).await?;
    let mut reader = tokio::io::BufReader::new(file).compat();
    let mut a_ready = Some(ZipFileReader::new(&mut reader));

    fn sanitize_file_path(path: &str) -> PathBuf {
        // Replaces backwards slashes
        path.replace('\\', "/")
            // Sanitizes each component
            .split('/')
            .map(sanitize_filename::sanitize)
            .collect()
    }

    while let Some(mut a_reading) = a_ready
        .take()
        .expect("unreachable")
        .next_with_entry()
        .await?
    {
        let reader = a_reading.reader();
        let Ok(name) = reader.entry().filename().as_str() else {
            a_ready = Some(a_reading.skip().await?);
            continue;
        };
        let relative = sanitize_file_path(name);
        if relative.as_os_str().is_empty() {
            // The name sanitized away entirely, e.g. a bare ".."
            a_ready = Some(a_reading.skip().await?);
            continue;
        }
        let p = path.as_ref().join(relative);

        if name.ends_with('/') {
            // Is a directory
            if !p.exists() {
                tokio::fs::create_dir_all(&p).await?;
            }
        } else {
            // Creates parent directories. They may not exist if iteration is out of order or the archive does not contain directory entries
            let parent = p.parent().expect("cant be a root dir");
            if !parent.is_dir() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let mut writer = tokio::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&p)
                .await?
                .compat_write();
            futures::io::copy(a_reading.reader_mut(), &mut writer).await?;
            writer.flush().await?;
        }

        a_ready = Some(a_reading.done().await?);
    }

    Ok(())
}
