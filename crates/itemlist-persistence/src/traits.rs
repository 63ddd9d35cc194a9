use async_trait::async_trait;
use chrono::{DateTime, Utc};
use itemlist_core::ItemListResult;
use itemlist_domain::Item;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of a successful write of the item list
#[derive(Debug, Clone, Serialize)]
pub struct SaveReport {
    /// Where the document was written
    pub path: PathBuf,
    /// Number of items in the written snapshot
    pub item_count: usize,
    pub bytes_written: usize,
    pub saved_at: DateTime<Utc>,
}

/// Trait for abstract storage of the item list
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Write the items, replacing whatever was stored before
    async fn save(&self, items: &[Item]) -> ItemListResult<SaveReport>;

    /// Read the stored items in their saved order
    async fn load(&self) -> ItemListResult<Vec<Item>>;

    /// Check if the store file exists
    async fn exists(&self) -> bool;

    /// Get the path to the store file
    fn path(&self) -> &Path;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> ItemListResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> ItemListResult<T>;
}
