//! Periodic saving of the editing session.

use crate::storage::{SavedState, Storage, StorageResult};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Default auto-save interval in seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Key under which the most recent state is also saved.
pub const LAST_STATE_KEY: &str = "__last_state__";

/// Storage id for a state saved at `at`, e.g. `state_20250307_091500`.
pub fn state_id_for(at: DateTime<Utc>) -> String {
    at.format("state_%Y%m%d_%H%M%S").to_string()
}

/// Tracks unsaved changes and writes the session out on an interval.
pub struct AutoSaveManager<S: Storage> {
    storage: Arc<S>,
    interval: Duration,
    enabled: bool,
    last_save: Option<Instant>,
    dirty: bool,
    /// Id of the state being edited; a fresh timestamped id is used when unset.
    current_state_id: Option<String>,
}

impl<S: Storage> AutoSaveManager<S> {
    /// Create a manager. Auto-saving starts disabled.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            interval: Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS),
            enabled: false,
            last_save: None,
            dirty: false,
            current_state_id: None,
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip auto-saving on or off, returning the new setting.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        log::info!("Auto-save {}", if self.enabled { "enabled" } else { "disabled" });
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Mark the session as having unsaved changes.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_state_id(&mut self, id: Option<String>) {
        self.current_state_id = id;
    }

    pub fn state_id(&self) -> Option<&str> {
        self.current_state_id.as_deref()
    }

    /// Whether an auto-save is due: enabled, dirty and the interval elapsed.
    pub fn should_save(&self) -> bool {
        self.should_save_at(Instant::now())
    }

    fn should_save_at(&self, now: Instant) -> bool {
        if !self.enabled || !self.dirty {
            return false;
        }
        match self.last_save {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        }
    }

    /// Save if an auto-save is due. Returns whether a save happened.
    pub async fn maybe_save(&mut self, state: &SavedState) -> StorageResult<bool> {
        if !self.should_save() {
            return Ok(false);
        }
        self.save(state).await?;
        Ok(true)
    }

    /// Save immediately, stamping `saved_at`. Returns the id saved under.
    pub async fn save(&mut self, state: &SavedState) -> StorageResult<String> {
        let now = Utc::now();
        let id = self
            .current_state_id
            .get_or_insert_with(|| state_id_for(now))
            .clone();

        let mut stamped = state.clone();
        stamped.saved_at = Some(now);

        self.storage.save(&id, &stamped).await?;
        self.storage.save(LAST_STATE_KEY, &stamped).await?;

        self.last_save = Some(Instant::now());
        self.dirty = false;
        log::info!("Saved editor state {id}");
        Ok(id)
    }

    /// Load a state by id and continue editing it.
    pub async fn load(&mut self, id: &str) -> StorageResult<SavedState> {
        let state = self.storage.load(id).await?;
        self.current_state_id = Some(id.to_string());
        self.dirty = false;
        self.last_save = Some(Instant::now());
        Ok(state)
    }

    /// The most recently saved state, if any.
    pub async fn load_last(&mut self) -> Option<SavedState> {
        match self.storage.load(LAST_STATE_KEY).await {
            Ok(state) => {
                self.dirty = false;
                self.last_save = Some(Instant::now());
                Some(state)
            }
            Err(e) => {
                log::debug!("No last state to restore: {e}");
                None
            }
        }
    }

    pub async fn delete(&self, id: &str) -> StorageResult<()> {
        self.storage.delete(id).await
    }

    /// Saved state ids, oldest first, without the last-state key.
    pub async fn list_states(&self) -> StorageResult<Vec<String>> {
        let mut ids = self.storage.list().await?;
        ids.retain(|id| id != LAST_STATE_KEY);
        Ok(ids)
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

/// Create a platform-appropriate storage backend.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_default_storage() -> StorageResult<Arc<crate::storage::FileStorage>> {
    Ok(Arc::new(crate::storage::FileStorage::default_location()?))
}

#[cfg(target_arch = "wasm32")]
pub fn create_default_storage() -> StorageResult<Arc<crate::storage::MemoryStorage>> {
    Ok(Arc::new(crate::storage::MemoryStorage::new()))
}

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = crate::storage::FileStorage;

#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = crate::storage::MemoryStorage;

pub type PlatformAutoSaveManager = AutoSaveManager<PlatformStorage>;

/// Create an auto-save manager over the default storage.
pub fn create_autosave_manager() -> StorageResult<PlatformAutoSaveManager> {
    let storage = create_default_storage()?;
    Ok(AutoSaveManager::new(storage))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::category::CategoryElements;
    use crate::config::EditorConfig;
    use crate::storage::{MemoryStorage, NewsData};
    use crate::testing::{block_on, sample_items, text};
    use crate::theme::Theme;
    use chrono::TimeZone;

    fn state() -> SavedState {
        let mut elements = CategoryElements::default();
        elements.summary.push(text("footer"));
        SavedState::new(
            NewsData::new(sample_items(2)),
            elements,
            Theme::default(),
            EditorConfig::default(),
        )
    }

    fn manager() -> AutoSaveManager<MemoryStorage> {
        AutoSaveManager::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_state_id_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(state_id_for(at), "state_20250307_090501");
    }

    #[test]
    fn test_disabled_never_due() {
        let mut manager = manager();
        manager.mark_dirty();
        assert!(!manager.is_enabled());
        assert!(!manager.should_save());

        assert!(manager.toggle());
        assert!(manager.should_save());
        assert!(!manager.toggle());
        assert!(!manager.should_save());
    }

    #[test]
    fn test_clean_never_due() {
        let mut manager = manager();
        manager.set_enabled(true);
        assert!(!manager.should_save());
    }

    #[test]
    fn test_interval_gates_saves() {
        let mut manager = manager();
        manager.set_enabled(true);
        manager.mark_dirty();
        block_on(manager.save(&state())).unwrap();
        manager.mark_dirty();

        let saved = manager.last_save.unwrap();
        assert!(!manager.should_save_at(saved + Duration::from_secs(29)));
        assert!(manager.should_save_at(saved + Duration::from_secs(30)));
    }

    #[test]
    fn test_maybe_save() {
        let mut manager = manager();
        assert!(!block_on(manager.maybe_save(&state())).unwrap());

        manager.set_enabled(true);
        manager.mark_dirty();
        assert!(block_on(manager.maybe_save(&state())).unwrap());
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_save_stamps_and_reuses_id() {
        let mut manager = manager();
        let first = block_on(manager.save(&state())).unwrap();
        assert!(first.starts_with("state_"));
        assert_eq!(manager.state_id(), Some(first.as_str()));

        let second = block_on(manager.save(&state())).unwrap();
        assert_eq!(first, second);

        let stored = block_on(manager.storage().load(&first)).unwrap();
        assert!(stored.saved_at.is_some());
        assert_eq!(stored.edited_elements, state().edited_elements);
    }

    #[test]
    fn test_load_last() {
        let mut manager = manager();
        manager.set_state_id(Some("mine".to_string()));
        block_on(manager.save(&state())).unwrap();

        let mut restored = AutoSaveManager::new(manager.storage().clone());
        let loaded = block_on(restored.load_last()).expect("last state saved");
        assert_eq!(loaded.edited_elements.summary.len(), 1);

        let mut empty = self::manager();
        assert!(block_on(empty.load_last()).is_none());
    }

    #[test]
    fn test_load_adopts_id() {
        let mut manager = manager();
        block_on(manager.storage().save("older", &state())).unwrap();

        block_on(manager.load("older")).unwrap();
        assert_eq!(manager.state_id(), Some("older"));
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_list_excludes_last_state_key() {
        let mut manager = manager();
        manager.set_state_id(Some("session".to_string()));
        block_on(manager.save(&state())).unwrap();

        let list = block_on(manager.list_states()).unwrap();
        assert_eq!(list, vec!["session"]);

        block_on(manager.delete("session")).unwrap();
        assert!(block_on(manager.list_states()).unwrap().is_empty());
    }
}
