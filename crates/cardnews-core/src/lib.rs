//! Cardnews Core Library
//!
//! Element state for the card-news page editor: per-category element
//! collections, undo history, selection and the geometry of drag and resize
//! gestures on a fixed 16:9 logical canvas.

pub mod canvas;
pub mod category;
pub mod config;
pub mod content;
pub mod element;
pub mod export;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod layout;
pub mod selection;
pub mod shortcuts;
pub mod storage;
pub mod store;
pub mod theme;

#[cfg(test)]
mod testing;

pub use canvas::Canvas;
pub use category::{Category, CategoryElements};
pub use config::{EditorConfig, ExportFormat};
pub use content::{ContentError, ContentSource, NewsItem, StaticContentSource};
pub use element::{Element, ElementError, ElementId, ElementKind, ElementPayload};
pub use export::ExportRequest;
pub use geometry::{CANVAS_HEIGHT, CANVAS_WIDTH, Corner, MIN_ELEMENT_SIZE, ViewportFit, compute_scale};
pub use gesture::{Gesture, GestureKind};
pub use history::{History, MAX_UNDO_HISTORY};
pub use selection::Selection;
pub use shortcuts::{EditorCommand, KeyPress, ShortcutRegistry};
pub use storage::{SavedState, Storage, StorageError};
pub use store::CategoryStore;
pub use theme::Theme;
