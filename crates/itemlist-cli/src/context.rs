use itemlist_core::{AppConfig, ItemListResult};
use itemlist_domain::{
    BroadcastSink, ItemStore, Notification, NotificationSink, TracingSink, WebSearch,
};
use itemlist_persistence::{ExportService, JsonFileStore, PersistenceStore};
use std::sync::Arc;
use tokio::sync::broadcast;

pub struct CliContext {
    pub store: ItemStore,
    pub config: AppConfig,
    sink: Arc<BroadcastSink>,
    notifications: broadcast::Receiver<Notification>,
    file: JsonFileStore,
}

impl CliContext {
    pub async fn load(file_path: &str, config: AppConfig) -> ItemListResult<Self> {
        let file = JsonFileStore::new(file_path);
        let sink = Arc::new(BroadcastSink::default());
        let notifications = sink.subscribe();

        let items = if file.exists().await {
            file.load().await?
        } else {
            Vec::new()
        };
        let store = ItemStore::with_items(items, sink.clone())?;

        Ok(Self {
            store,
            config,
            sink,
            notifications,
            file,
        })
    }

    pub async fn save(&self) -> ItemListResult<()> {
        self.file.save(self.store.items()).await?;
        Ok(())
    }

    pub fn export_service(&self) -> ExportService {
        ExportService::new(self.sink.clone())
    }

    pub fn web_search(&self) -> WebSearch {
        WebSearch::from_config(&self.config)
    }

    /// Collect everything emitted since the last call, logging each event.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        let mut drained = Vec::new();
        while let Ok(notification) = self.notifications.try_recv() {
            TracingSink.notify(notification.clone());
            drained.push(notification);
        }
        drained
    }
}
