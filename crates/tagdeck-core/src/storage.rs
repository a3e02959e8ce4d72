//! Persisted view state.
//!
//! The viewer remembers the tag selection and the current entry across page
//! loads through a string key-value store (browser `localStorage` in the UI,
//! [`MemoryStore`] in tests). Persistence is best effort: read failures fall
//! back to defaults and write failures are logged and dropped.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Default storage key for the view snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "tagdeck.view-state";

/// Serialized view of the player, written on every state change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    /// Selected filter tags, in selection order.
    #[serde(default)]
    pub selected_tags: Vec<String>,
    /// Ids of the filtered list at the time of writing.
    #[serde(default)]
    pub order: Vec<String>,
    /// Index of the current entry within `order`.
    #[serde(default)]
    pub current_index: Option<usize>,
    /// Playback position in seconds.
    #[serde(default)]
    pub current_time: f64,
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes a [`ViewSnapshot`] under a fixed key.
#[derive(Debug)]
pub struct ViewStateStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ViewStateStore<S> {
    /// Create a view-state store writing to `key` in `store`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored snapshot, strictly.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the value is not a
    /// valid snapshot.
    pub fn try_load(&self) -> Result<Option<ViewSnapshot>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let snapshot = serde_json::from_str(&raw)?;
        Ok(Some(snapshot))
    }

    /// Read the stored snapshot, treating any failure as "nothing stored".
    #[must_use]
    pub fn load(&self) -> Option<ViewSnapshot> {
        match self.try_load() {
            Ok(Some(snapshot)) => {
                debug!(key = %self.key, "Loaded view state");
                Some(snapshot)
            }
            Ok(None) => {
                debug!(key = %self.key, "No stored view state, using defaults");
                None
            }
            Err(e) => {
                warn!(key = %self.key, "Ignoring unreadable view state: {}", e);
                None
            }
        }
    }

    /// Write `snapshot`, strictly.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    pub fn try_save(&self, snapshot: &ViewSnapshot) -> Result<()> {
        let raw = serde_json::to_string(snapshot)?;
        self.store.set(&self.key, &raw)
    }

    /// Write `snapshot`, logging and discarding any failure.
    pub fn save(&self, snapshot: &ViewSnapshot) {
        if let Err(e) = self.try_save(snapshot) {
            warn!(key = %self.key, "Failed to persist view state: {}", e);
        }
    }
}

/// A store whose reads and writes always fail. Useful where storage is
/// unavailable (private browsing, sandboxed frames).
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Storage("storage is unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("storage is unavailable".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn snapshot() -> ViewSnapshot {
        ViewSnapshot {
            selected_tags: vec!["jpop".to_string()],
            order: vec!["l6ZBoygz8hU".to_string(), "kwfPxOM415o".to_string()],
            current_index: Some(1),
            current_time: 0.0,
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = ViewStateStore::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        store.save(&snapshot());
        assert_eq!(store.load(), Some(snapshot()));
    }

    #[test]
    fn test_load_missing_is_none() {
        let store = ViewStateStore::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        assert_eq!(store.load(), None);
        assert!(store.try_load().unwrap().is_none());
    }

    #[test]
    fn test_load_garbage_falls_back() {
        let backing = MemoryStore::new();
        backing.set(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let store = ViewStateStore::new(backing, DEFAULT_STORAGE_KEY);

        assert!(matches!(store.try_load(), Err(Error::Serialization(_))));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_unavailable_store_is_silent() {
        let store = ViewStateStore::new(UnavailableStore, DEFAULT_STORAGE_KEY);
        store.save(&snapshot());
        assert_eq!(store.load(), None);
        assert!(matches!(store.try_save(&snapshot()), Err(Error::Storage(_))));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["selectedTags"][0], "jpop");
        assert_eq!(json["currentIndex"], 1);
        assert_eq!(json["currentTime"], 0.0);
    }

    #[test]
    fn test_partial_snapshot_uses_defaults() {
        let parsed: ViewSnapshot = serde_json::from_str(r#"{"selectedTags":["pop"]}"#).unwrap();
        assert_eq!(parsed.selected_tags, vec!["pop"]);
        assert!(parsed.order.is_empty());
        assert_eq!(parsed.current_index, None);
    }
}
