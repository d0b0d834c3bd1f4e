//! File-based storage for native platforms.

use super::{BoxFuture, SavedState, Storage, StorageError, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each saved state as a JSON file in a directory.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `base_path`, creating the directory
    /// if needed.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(|e| StorageError::Io(format!("Failed to create storage directory: {e}")))?;
        }
        Ok(Self { base_path })
    }

    /// File storage in the per-user data directory, e.g.
    /// `~/.local/share/cardnews/states/` on Linux.
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("cardnews").join("states"))
    }

    fn state_path(&self, id: &str) -> PathBuf {
        let safe_id: String = id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{safe_id}.json"))
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, id: &str, state: &SavedState) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.state_path(id);
        let json = state.to_json().map_err(|e| StorageError::Serialization(e.to_string()));

        Box::pin(async move {
            fs::write(&path, json?)
                .map_err(|e| StorageError::Io(format!("Failed to write {}: {e}", path.display())))?;
            log::info!("Saved state to {}", path.display());
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<SavedState>> {
        let path = self.state_path(id);
        let id = id.to_string();

        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(id));
            }
            let json = fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(format!("Failed to read {}: {e}", path.display())))?;
            let state = SavedState::from_json(&json).map_err(|e| {
                StorageError::Serialization(format!("Failed to parse {}: {e}", path.display()))
            })?;
            log::info!("Loaded state from {}", path.display());
            Ok(state)
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.state_path(id);

        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path)
                    .map_err(|e| StorageError::Io(format!("Failed to delete {}: {e}", path.display())))?;
            }
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        let base = self.base_path.clone();

        Box::pin(async move {
            if !base.exists() {
                return Ok(vec![]);
            }
            let entries =
                fs::read_dir(&base).map_err(|e| StorageError::Io(format!("Failed to read directory: {e}")))?;

            let mut ids: Vec<String> = entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
                .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
                .collect();
            ids.sort();
            Ok(ids)
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.state_path(id);
        Box::pin(async move { Ok(path.exists()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryElements;
    use crate::config::EditorConfig;
    use crate::storage::NewsData;
    use crate::testing::{block_on, sample_items, text};
    use crate::theme::Theme;
    use tempfile::tempdir;

    fn state() -> SavedState {
        let mut elements = CategoryElements::default();
        elements.cover.push(text("title"));
        SavedState::new(
            NewsData::new(sample_items(3)),
            elements,
            Theme::default(),
            EditorConfig::default(),
        )
    }

    #[test]
    fn test_file_storage_save_load() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let state = state();

        block_on(storage.save("session", &state)).unwrap();
        let loaded = block_on(storage.load("session")).unwrap();

        assert_eq!(loaded, state);
        assert!(dir.path().join("session.json").exists());
    }

    #[test]
    fn test_file_storage_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let result = block_on(storage.load("nonexistent"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_file_storage_corrupt_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        fs::write(dir.path().join("broken.json"), "{").unwrap();

        let result = block_on(storage.load("broken"));
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_file_storage_list_sorted_json_only() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        block_on(storage.save("state_20250307_090000", &state())).unwrap();
        block_on(storage.save("state_20250306_090000", &state())).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let list = block_on(storage.list()).unwrap();
        assert_eq!(list, vec!["state_20250306_090000", "state_20250307_090000"]);
    }

    #[test]
    fn test_file_storage_delete() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        block_on(storage.save("test", &state())).unwrap();
        assert!(block_on(storage.exists("test")).unwrap());

        block_on(storage.delete("test")).unwrap();
        assert!(!block_on(storage.exists("test")).unwrap());
    }

    #[test]
    fn test_file_storage_sanitizes_id() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let state = state();

        block_on(storage.save("../escape:me", &state)).unwrap();

        assert!(dir.path().join("___escape_me.json").exists());
        let loaded = block_on(storage.load("../escape:me")).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(nested.clone()).unwrap();
        assert_eq!(storage.base_path(), nested.as_path());
        assert!(nested.is_dir());
    }
}
