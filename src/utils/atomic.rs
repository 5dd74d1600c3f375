//! Atomic document writes.
//!
//! A document is written to a temp file next to its target and renamed into
//! place, so readers listing a collection never observe a half-written file.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Prefix of in-flight temp files; collection scans skip them.
pub const TEMP_FILE_PREFIX: &str = ".tmp";

/// Write `content` to `path` atomically.
///
/// # Errors
///
/// Returns an `io::Error` if the path has no parent, the temp file cannot be
/// created or written, or the final rename fails. The temp file is removed on
/// failure.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        // Same directory as the target so the rename stays on one filesystem
        let mut temp_file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .tempfile_in(&parent)?;
        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.flush()?;
        persist(temp_file, &target_path)
    })
    .await
    .map_err(io::Error::other)?
}

fn persist(temp_file: NamedTempFile, target: &Path) -> io::Result<()> {
    temp_file.persist(target).map(|_| ()).map_err(|e| e.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a1.md");

        atomic_write(&file_path, "---\ntipo: perdido\n---\n")
            .await
            .unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "---\ntipo: perdido\n---\n");
    }

    #[tokio::test]
    async fn test_atomic_write_no_leftover_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a1.md");

        atomic_write(&file_path, "content").await.unwrap();

        let count = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(count, 1, "Should only have the target file, no temp files");
    }

    #[tokio::test]
    async fn test_atomic_write_fails_with_invalid_parent() {
        let result = atomic_write(Path::new("/nonexistent/deeply/nested/a1.md"), "content").await;
        assert!(result.is_err());
    }
}
