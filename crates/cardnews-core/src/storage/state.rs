//! The persisted editor state.

use crate::category::CategoryElements;
use crate::config::EditorConfig;
use crate::content::NewsItem;
use crate::element::{ElementError, validate_collection};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current saved-state format version.
pub const STATE_VERSION: &str = "1.0";

/// The news the pages were generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsData {
    pub fetched_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

impl NewsData {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            fetched_at: Utc::now(),
            items,
        }
    }
}

/// Everything needed to reopen an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub version: String,
    pub news_data: NewsData,
    /// Stored collection of every category.
    #[serde(default)]
    pub edited_elements: CategoryElements,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub config: EditorConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedState {
    pub fn new(news_data: NewsData, edited_elements: CategoryElements, theme: Theme, config: EditorConfig) -> Self {
        Self {
            version: STATE_VERSION.to_string(),
            news_data,
            edited_elements,
            theme,
            config,
            saved_at: None,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    ///
    /// Only the shape is checked here; call [`SavedState::validate`] before
    /// handing the elements to a canvas.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check every stored element collection.
    pub fn validate(&self) -> Result<(), ElementError> {
        for (_, elements) in self.edited_elements.iter() {
            validate_collection(elements)?;
        }
        Ok(())
    }
}
