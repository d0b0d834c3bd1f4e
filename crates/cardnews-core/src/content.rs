//! News content consumed to populate the pages.

use crate::storage::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One fetched news record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source_url: String,
    pub discussion_url: String,
}

impl NewsItem {
    /// Parse the JSON array a news endpoint returns.
    pub fn list_from_json(json: &str) -> Result<Vec<NewsItem>, ContentError> {
        serde_json::from_str(json).map_err(|e| ContentError::Malformed(e.to_string()))
    }
}

/// Content source errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content source unavailable: {0}")]
    Unavailable(String),
    #[error("Malformed content: {0}")]
    Malformed(String),
}

/// Supplies news records, typically over the network.
///
/// The editor never blocks on a source: the caller awaits the future and
/// hands the result to [`crate::Canvas::populate`].
pub trait ContentSource {
    /// Fetch the current news items. `force_refresh` bypasses any cache the
    /// source keeps.
    fn fetch(&self, force_refresh: bool) -> BoxFuture<'_, Result<Vec<NewsItem>, ContentError>>;
}

/// A content source serving a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    items: Vec<NewsItem>,
}

impl StaticContentSource {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }
}

impl ContentSource for StaticContentSource {
    fn fetch(&self, _force_refresh: bool) -> BoxFuture<'_, Result<Vec<NewsItem>, ContentError>> {
        let items = self.items.clone();
        Box::pin(async move { Ok(items) })
    }
}
