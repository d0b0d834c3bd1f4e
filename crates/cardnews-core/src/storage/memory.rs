//! In-memory storage.

use super::{BoxFuture, SavedState, Storage, StorageError, StorageResult};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory storage for tests and for platforms without a filesystem.
#[derive(Default)]
pub struct MemoryStorage {
    states: RwLock<BTreeMap<String, SavedState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, BTreeMap<String, SavedState>>> {
        self.states
            .read()
            .map_err(|e| StorageError::Other(format!("Lock error: {e}")))
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, BTreeMap<String, SavedState>>> {
        self.states
            .write()
            .map_err(|e| StorageError::Other(format!("Lock error: {e}")))
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, state: &SavedState) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let state = state.clone();
        Box::pin(async move {
            self.write()?.insert(id, state);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<SavedState>> {
        let id = id.to_string();
        Box::pin(async move { self.read()?.get(&id).cloned().ok_or(StorageError::NotFound(id)) })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.write()?.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move { Ok(self.read()?.keys().cloned().collect()) })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move { Ok(self.read()?.contains_key(&id)) })
    }
}
