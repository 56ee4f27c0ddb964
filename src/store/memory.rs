//! In-memory store
//!
//! Holds the serialized text rather than the parsed mapping, so it behaves
//! like a real storage slot: malformed seeded data reads as empty, and
//! clones share the slot the way two bindings share one origin.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::prefs::PreferenceMap;

use super::PreferenceStore;

/// Memory-backed preference store, for tests and ephemeral hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    /// Create a store with nothing stored
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with raw text, as a previous session would
    /// have left it
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(text.into()))),
        }
    }

    /// The raw stored text, if any
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> PreferenceMap {
        self.lock()
            .as_deref()
            .and_then(|text| serde_json::from_str(text).ok())
            .unwrap_or_default()
    }

    fn save(&self, map: &PreferenceMap) -> Result<()> {
        let text = serde_json::to_string(map)?;
        *self.lock() = Some(text);
        Ok(())
    }
}
