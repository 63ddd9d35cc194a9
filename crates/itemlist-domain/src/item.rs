use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ItemId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub content: String,
    #[serde(rename = "isSelected")]
    pub is_selected: bool,
}

impl Item {
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            is_selected: false,
        }
    }

    /// Content used when an item is added without an explicit note.
    pub fn default_content() -> String {
        format!(
            "User added item: {}",
            Local::now().format("%Y-%m-%d %H:%M")
        )
    }

    /// Exact match after lowercasing both sides. Whitespace is not normalized.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn toggle_selection(&mut self) {
        self.is_selected = !self.is_selected;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    pub fn update(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
    }
}
