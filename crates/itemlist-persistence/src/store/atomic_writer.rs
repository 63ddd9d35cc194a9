use itemlist_core::{ItemListError, ItemListResult};
use std::io::Write;
use std::path::Path;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → fsync → rename, so readers see either the old
/// file or the complete new one
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically without blocking the async runtime
    pub async fn write_atomic(path: &Path, data: &[u8]) -> ItemListResult<()> {
        let path = path.to_path_buf();
        let data = data.to_vec();
        tokio::task::spawn_blocking(move || Self::write_atomic_blocking(&path, &data))
            .await
            .map_err(|e| ItemListError::Internal(format!("write task failed: {}", e)))?
    }

    /// Blocking variant of [`AtomicWriter::write_atomic`]
    pub fn write_atomic_blocking(path: &Path, data: &[u8]) -> ItemListResult<()> {
        // Temp file must live on the same filesystem for the rename to be atomic
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        // Temp files are created 0600; the rename would carry that over
        if let Some(permissions) = target_permissions(path) {
            temp_file.as_file().set_permissions(permissions)?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub async fn read_all(path: &Path) -> ItemListResult<Vec<u8>> {
        let data = tokio::fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}

/// Permissions the written file should end up with: those of the file being
/// replaced, or 0644 for a new file.
fn target_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(metadata) = std::fs::metadata(path) {
        return Some(metadata.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("items.json");
        let data = b"[]";

        AtomicWriter::write_atomic(&file_path, data).await.unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, data);
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("items.json");

        AtomicWriter::write_atomic(&file_path, b"First")
            .await
            .unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second")
            .await
            .unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, b"Second");
    }

    #[tokio::test]
    async fn test_leaves_no_temp_files_behind() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("items.json");

        AtomicWriter::write_atomic(&file_path, b"data").await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_directory_fails_without_creating_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing").join("items.json");

        let result = AtomicWriter::write_atomic(&file_path, b"data").await;

        assert!(matches!(result, Err(ItemListError::Io(_))));
        assert!(!file_path.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_new_file_is_not_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("items.json");

        AtomicWriter::write_atomic(&file_path, b"[]").await.unwrap();

        let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_overwrite_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("items.json");
        std::fs::write(&file_path, b"First").unwrap();
        std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o640)).unwrap();

        AtomicWriter::write_atomic(&file_path, b"Second")
            .await
            .unwrap();

        let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
        assert_eq!(std::fs::read(&file_path).unwrap(), b"Second");
    }
}
