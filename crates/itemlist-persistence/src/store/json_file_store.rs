use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceStore, SaveReport, Serializer};
use itemlist_core::ItemListResult;
use itemlist_domain::Item;
use std::path::{Path, PathBuf};

/// JSON file-based persistence store
/// The file holds a pretty-printed JSON array of items, the same document
/// the backup export produces
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a new JSON file store
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, items: &[Item]) -> ItemListResult<SaveReport> {
        let bytes = JsonSerializer.serialize(&items.to_vec())?;

        AtomicWriter::write_atomic(&self.path, &bytes).await?;

        tracing::info!(
            "Saved {} items ({} bytes) to {}",
            items.len(),
            bytes.len(),
            self.path.display()
        );

        Ok(SaveReport {
            path: self.path.clone(),
            item_count: items.len(),
            bytes_written: bytes.len(),
            saved_at: chrono::Utc::now(),
        })
    }

    async fn load(&self) -> ItemListResult<Vec<Item>> {
        let file_bytes = AtomicWriter::read_all(&self.path).await?;
        let items: Vec<Item> = JsonSerializer.deserialize(&file_bytes)?;

        tracing::info!(
            "Loaded {} items from {}",
            items.len(),
            self.path.display()
        );

        Ok(items)
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
