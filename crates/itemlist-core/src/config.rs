use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SEARCH_URL_PREFIX: &str = "https://www.google.com/search?q=";
pub const DEFAULT_BACKUP_FILE_NAME: &str = "items_backup.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix the percent-encoded search query is appended to.
    #[serde(default)]
    pub search_url_prefix: Option<String>,
    /// Directory backups are written to when no explicit path is given.
    #[serde(default)]
    pub backup_dir: Option<PathBuf>,
    #[serde(default)]
    pub backup_file_name: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/itemlist/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("itemlist/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("itemlist\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = Self::from_toml(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn effective_search_url_prefix(&self) -> &str {
        self.search_url_prefix
            .as_deref()
            .unwrap_or(DEFAULT_SEARCH_URL_PREFIX)
    }

    pub fn effective_backup_file_name(&self) -> &str {
        self.backup_file_name
            .as_deref()
            .unwrap_or(DEFAULT_BACKUP_FILE_NAME)
    }

    /// Falls back to the user's documents directory if it exists, then the
    /// temp directory.
    pub fn effective_backup_dir(&self) -> PathBuf {
        self.backup_dir
            .clone()
            .or_else(|| dirs::document_dir().filter(|dir| dir.is_dir()))
            .unwrap_or_else(std::env::temp_dir)
    }

    pub fn effective_backup_path(&self) -> PathBuf {
        self.effective_backup_dir()
            .join(self.effective_backup_file_name())
    }
}
