//! Backup export and import.
//!
//! `ExportService` turns an item snapshot into a JSON document, writes it
//! atomically to a caller-chosen destination, and reports the outcome as a
//! notification. Exports can run on a background task; the snapshot is
//! owned by the task, so later edits to the store never leak into a backup
//! that is already in flight.

use crate::serialization::JsonSerializer;
use crate::store::JsonFileStore;
use crate::traits::{PersistenceStore, SaveReport, Serializer};
use itemlist_core::config::DEFAULT_BACKUP_FILE_NAME;
use itemlist_core::ItemListResult;
use itemlist_domain::{Item, Notification, NotificationSink};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct ExportService {
    sink: Arc<dyn NotificationSink>,
}

impl ExportService {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    /// Encode items as a pretty-printed JSON array, preserving order.
    pub fn serialize(items: &[Item]) -> ItemListResult<Vec<u8>> {
        JsonSerializer.serialize(&items.to_vec())
    }

    pub fn deserialize(bytes: &[u8]) -> ItemListResult<Vec<Item>> {
        JsonSerializer.deserialize(bytes)
    }

    /// Temporary location a backup is staged at before the user picks a
    /// destination.
    pub fn staging_path(file_name: Option<&str>) -> PathBuf {
        std::env::temp_dir().join(file_name.unwrap_or(DEFAULT_BACKUP_FILE_NAME))
    }

    /// Write `items` to `path` and report the outcome to the sink.
    pub async fn export_snapshot(
        &self,
        items: &[Item],
        path: &Path,
    ) -> ItemListResult<SaveReport> {
        let store = JsonFileStore::new(path);
        match store.save(items).await {
            Ok(report) => {
                self.sink.notify(Notification::backup_saved(report.item_count));
                Ok(report)
            }
            Err(e) => {
                tracing::error!("Backup to {} failed: {}", store.path().display(), e);
                self.sink.notify(Notification::backup_failed(&e.to_string()));
                Err(e)
            }
        }
    }

    /// Run [`ExportService::export_snapshot`] on a background task.
    pub fn spawn_export(
        &self,
        items: Vec<Item>,
        path: PathBuf,
    ) -> JoinHandle<ItemListResult<SaveReport>> {
        let service = self.clone();
        tokio::spawn(async move { service.export_snapshot(&items, &path).await })
    }

    /// Read a backup. Any read or parse failure rejects the whole file.
    pub async fn import(&self, path: &Path) -> ItemListResult<Vec<Item>> {
        JsonFileStore::new(path).load().await.inspect_err(|e| {
            tracing::warn!("Import from {} rejected: {}", path.display(), e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemlist_core::ItemListError;
    use itemlist_domain::{BroadcastSink, ItemStore, NotificationKind};
    use tempfile::tempdir;

    fn sample_items() -> Vec<Item> {
        let mut items = vec![
            Item::new("Türkiye wikipedia".to_string(), "Keyword Description".to_string()),
            Item::new("Moldova stiri".to_string(), "Second Keyword Description".to_string()),
            Item::new("999 apartament".to_string(), "Third Keyword Description".to_string()),
        ];
        items[1].set_selected(true);
        items
    }

    fn service() -> (ExportService, Arc<BroadcastSink>) {
        let sink = Arc::new(BroadcastSink::new(16));
        (ExportService::new(sink.clone()), sink)
    }

    #[test]
    fn test_round_trip_preserves_fields_and_order() {
        let items = sample_items();
        let bytes = ExportService::serialize(&items).unwrap();
        assert_eq!(ExportService::deserialize(&bytes).unwrap(), items);
    }

    #[test]
    fn test_empty_list_round_trip() {
        let bytes = ExportService::serialize(&[]).unwrap();
        assert!(ExportService::deserialize(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_malformed_is_parse_error() {
        let result = ExportService::deserialize(b"[{\"id\": 1}");
        assert!(matches!(result, Err(ItemListError::Parse(_))));
    }

    #[test]
    fn test_staging_path_default_name() {
        let path = ExportService::staging_path(None);
        assert!(path.ends_with("items_backup.json"));
        assert!(ExportService::staging_path(Some("other.json")).ends_with("other.json"));
    }

    #[tokio::test]
    async fn test_export_writes_file_and_notifies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items_backup.json");
        let (service, sink) = service();
        let mut rx = sink.subscribe();
        let items = sample_items();

        let report = service.export_snapshot(&items, &path).await.unwrap();

        assert_eq!(report.item_count, 3);
        let written = std::fs::read(&path).unwrap();
        assert_eq!(ExportService::deserialize(&written).unwrap(), items);

        let notification = rx.try_recv().unwrap();
        assert_eq!(notification, Notification::backup_saved(3));
    }

    #[tokio::test]
    async fn test_export_failure_notifies_and_keeps_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("items_backup.json");
        let (service, sink) = service();
        let mut rx = sink.subscribe();
        let mut store = ItemStore::new(sink.clone());
        store.add("Alpha".to_string(), String::new()).unwrap();
        let _ = rx.try_recv();

        let result = service.export_snapshot(&store.snapshot(), &path).await;

        assert!(matches!(result, Err(ItemListError::Io(_))));
        assert!(!path.exists());
        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.kind, NotificationKind::BackupFailed);
        assert!(notification.body.starts_with("Failed to backup items: "));
        assert_eq!(store.len(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_export_leaves_previous_backup_intact() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let path = dir.path().join("items_backup.json");
        let (service, sink) = service();
        let first = sample_items();
        service.export_snapshot(&first, &path).await.unwrap();
        let original = std::fs::read(&path).unwrap();

        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();
        // Permission bits do not stop root; nothing to check in that case
        let writable = dir.path().join("writable");
        if std::fs::write(&writable, b"").is_ok() {
            std::fs::remove_file(&writable).unwrap();
            std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut rx = sink.subscribe();
        let newer = vec![Item::new("Only".to_string(), String::new())];
        let result = service.export_snapshot(&newer, &path).await;

        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(ItemListError::Io(_))));
        let notification = rx.try_recv().unwrap();
        assert_eq!(notification.kind, NotificationKind::BackupFailed);
        assert_eq!(std::fs::read(&path).unwrap(), original);
        assert_eq!(service.import(&path).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_previous_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items_backup.json");
        let (service, _sink) = service();

        service
            .export_snapshot(&sample_items(), &path)
            .await
            .unwrap();
        let newer = vec![Item::new("Only".to_string(), String::new())];
        service.export_snapshot(&newer, &path).await.unwrap();

        assert_eq!(service.import(&path).await.unwrap(), newer);
    }

    #[tokio::test]
    async fn test_background_export_uses_point_in_time_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items_backup.json");
        let (service, sink) = service();
        let mut store = ItemStore::new(sink.clone());
        store.add("A".to_string(), String::new()).unwrap();
        store.add("B".to_string(), String::new()).unwrap();
        let expected = store.snapshot();

        let handle = service.spawn_export(store.snapshot(), path.clone());

        // Mutations racing with the export must not show up in the backup
        store.set_select_all(true);
        store.delete_selected();
        store.add("C".to_string(), String::new()).unwrap();

        let report = handle.await.unwrap().unwrap();
        assert_eq!(report.item_count, 2);
        assert_eq!(service.import(&path).await.unwrap(), expected);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_readers_never_see_partial_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items_backup.json");
        let (service, _sink) = service();
        service.export_snapshot(&[], &path).await.unwrap();

        let handles: Vec<_> = (0..20)
            .map(|n| {
                let items: Vec<Item> = (0..n * 10)
                    .map(|i| Item::new(format!("item {}", i), "x".repeat(64)))
                    .collect();
                service.spawn_export(items, path.clone())
            })
            .collect();

        for _ in 0..50 {
            let bytes = tokio::fs::read(&path).await.unwrap();
            assert!(ExportService::deserialize(&bytes).is_ok());
            tokio::task::yield_now().await;
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
    }

    #[tokio::test]
    async fn test_import_malformed_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items_backup.json");
        std::fs::write(&path, "not json").unwrap();
        let (service, _sink) = service();

        let result = service.import(&path).await;
        assert!(matches!(result, Err(ItemListError::Parse(_))));
    }
}
