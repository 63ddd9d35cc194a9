//! Ordered item collection.
//!
//! `ItemStore` owns the list and enforces its invariants: insertion order is
//! stable, ids are unique, and titles are never empty. Mutations that the
//! user should hear about are reported through the store's
//! [`NotificationSink`].

use crate::item::{Item, ItemId};
use crate::notification::{Notification, NotificationSink};
use itemlist_core::{ItemListError, ItemListResult};
use std::collections::HashSet;
use std::sync::Arc;

pub struct ItemStore {
    items: Vec<Item>,
    sink: Arc<dyn NotificationSink>,
}

impl ItemStore {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            items: Vec::new(),
            sink,
        }
    }

    /// Build a store from previously saved items.
    pub fn with_items(items: Vec<Item>, sink: Arc<dyn NotificationSink>) -> ItemListResult<Self> {
        validate(&items)?;
        Ok(Self { items, sink })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True iff the list is non-empty and every item is selected.
    pub fn all_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.is_selected)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.items.iter().any(|item| item.title_matches(title))
    }

    /// Append a new item unless its title collides (case-insensitively)
    /// with an existing one.
    pub fn add(&mut self, title: String, content: String) -> ItemListResult<ItemId> {
        ensure_title(&title)?;
        if self.contains_title(&title) {
            tracing::debug!("Rejected duplicate title {:?}", title);
            return Err(ItemListError::DuplicateTitle { title });
        }
        self.add_forced(title, content)
    }

    /// Append a new item without the duplicate check. Called once the user
    /// has confirmed a duplicate title.
    pub fn add_forced(&mut self, title: String, content: String) -> ItemListResult<ItemId> {
        ensure_title(&title)?;
        let item = Item::new(title, content);
        let id = item.id;
        let notification = Notification::item_added(&item.title);
        tracing::debug!("Added item {} ({:?})", id, item.title);
        self.items.push(item);
        self.sink.notify(notification);
        Ok(id)
    }

    pub fn toggle_selection(&mut self, id: ItemId) -> ItemListResult<()> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.toggle_selection();
                Ok(())
            }
            None => {
                tracing::warn!("Cannot toggle selection: item {} not found", id);
                Err(ItemListError::NotFound(id))
            }
        }
    }

    pub fn set_select_all(&mut self, selected: bool) {
        for item in &mut self.items {
            item.set_selected(selected);
        }
    }

    /// Remove every selected item and return their ids in list order.
    pub fn delete_selected(&mut self) -> Vec<ItemId> {
        let (removed, kept): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.is_selected);
        self.items = kept;

        if removed.is_empty() {
            return Vec::new();
        }

        let titles: Vec<String> = removed.iter().map(|item| item.title.clone()).collect();
        self.sink.notify(Notification::selected_deleted(&titles));
        tracing::debug!("Deleted {} selected items", removed.len());

        removed.into_iter().map(|item| item.id).collect()
    }

    pub fn clear_all(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        self.sink.notify(Notification::list_cleared());
        tracing::debug!("Cleared {} items", count);
        count
    }

    /// Edit an item in place. Duplicate titles are allowed here.
    pub fn update(&mut self, id: ItemId, title: String, content: String) -> ItemListResult<()> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::warn!("Cannot update: item {} not found", id);
            return Err(ItemListError::NotFound(id));
        };
        ensure_title(&title)?;
        item.update(title, content);
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Replace the whole list with imported items. Nothing changes if the
    /// import is invalid.
    pub fn restore(&mut self, items: Vec<Item>) -> ItemListResult<usize> {
        validate(&items)?;
        let count = items.len();
        self.items = items;
        tracing::info!("Restored {} items", count);
        Ok(count)
    }
}

fn ensure_title(title: &str) -> ItemListResult<()> {
    if title.is_empty() {
        return Err(ItemListError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate(items: &[Item]) -> ItemListResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        ensure_title(&item.title)?;
        if !seen.insert(item.id) {
            return Err(ItemListError::Validation(format!(
                "duplicate item id {}",
                item.id
            )));
        }
    }
    Ok(())
}
