//! User-facing notification events.
//!
//! The store and the export service describe what happened as a
//! `(title, body)` payload and hand it to a [`NotificationSink`]. Delivery
//! (system notifications, terminal output, a UI toast) is up to the sink.

use serde::Serialize;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ItemAdded,
    ListCleared,
    SelectedDeleted,
    BackupSaved,
    BackupFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, body: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            body,
        }
    }

    pub fn item_added(item_title: &str) -> Self {
        Self::new(
            NotificationKind::ItemAdded,
            "New Item Added",
            format!("\"{}\" added to the list", item_title),
        )
    }

    pub fn list_cleared() -> Self {
        Self::new(
            NotificationKind::ListCleared,
            "List Cleared",
            "All items have been deleted".to_string(),
        )
    }

    pub fn selected_deleted(titles: &[String]) -> Self {
        Self::new(
            NotificationKind::SelectedDeleted,
            "Selected Items Deleted",
            format!("{} deleted", titles.join(", ")),
        )
    }

    pub fn backup_saved(count: usize) -> Self {
        Self::new(
            NotificationKind::BackupSaved,
            "List Backed Up",
            format!("{} items saved successfully", count),
        )
    }

    pub fn backup_failed(reason: &str) -> Self {
        Self::new(
            NotificationKind::BackupFailed,
            "Backup Error",
            format!("Failed to backup items: {}", reason),
        )
    }
}

/// Receiver of notification events.
///
/// Implementations must not assume which thread calls them: export
/// completion is reported from a background task.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Fans notifications out to any number of subscribers.
pub struct BroadcastSink {
    tx: broadcast::Sender<Notification>,
}

impl BroadcastSink {
    /// Create a sink whose channel buffers up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new(32)
    }
}

impl NotificationSink for BroadcastSink {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::trace!("Notification dropped: no subscribers");
        }
    }
}

/// Writes notifications to the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            kind = ?notification.kind,
            title = %notification.title,
            "{}",
            notification.body
        );
    }
}
