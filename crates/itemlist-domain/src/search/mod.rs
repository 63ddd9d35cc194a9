//! Web search URL construction.
//!
//! The list never talks to the network itself. It only builds the URL an
//! external browser should open for a free-text query or an item title.

use crate::Item;
use itemlist_core::config::DEFAULT_SEARCH_URL_PREFIX;
use itemlist_core::AppConfig;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a URL query component. Everything else that is
/// ASCII passes through; non-ASCII bytes are always escaped.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode free text for use as a query string value.
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY).to_string()
}

/// Builds search URLs against a configurable engine.
#[derive(Debug, Clone)]
pub struct WebSearch {
    prefix: String,
}

impl WebSearch {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.effective_search_url_prefix())
    }

    /// Returns `None` for an empty query.
    pub fn url_for(&self, query: &str) -> Option<String> {
        if query.is_empty() {
            return None;
        }
        Some(format!("{}{}", self.prefix, encode_query(query)))
    }

    pub fn url_for_item(&self, item: &Item) -> Option<String> {
        self.url_for(&item.title)
    }
}

impl Default for WebSearch {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_URL_PREFIX)
    }
}
