//! Persistence of editing sessions.

mod autosave;
mod memory;
mod state;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use autosave::{
    AutoSaveManager, DEFAULT_AUTOSAVE_INTERVAL_SECS, LAST_STATE_KEY, PlatformAutoSaveManager, PlatformStorage,
    create_autosave_manager, create_default_storage, state_id_for,
};
pub use memory::MemoryStorage;
pub use state::{NewsData, STATE_VERSION, SavedState};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("State not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Saved-state storage backend.
///
/// On native platforms implementations must be Send + Sync. On WASM the
/// bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait Storage: Send + Sync {
    fn save(&self, id: &str, state: &SavedState) -> BoxFuture<'_, StorageResult<()>>;

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<SavedState>>;

    /// Deleting a missing id is not an error.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// All stored ids, sorted.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// Saved-state storage backend (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait Storage {
    fn save(&self, id: &str, state: &SavedState) -> BoxFuture<'_, StorageResult<()>>;

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<SavedState>>;

    /// Deleting a missing id is not an error.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// All stored ids, sorted.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
