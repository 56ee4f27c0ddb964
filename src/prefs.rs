//! Preference Mapping
//!
//! The persisted association of toggle identifier to checked state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from toggle identifier to checked state.
///
/// Keys are unique, order is irrelevant. Serializes as a flat JSON object,
/// e.g. `{"en_checkbox": true, "fr_checkbox": false}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceMap {
    entries: BTreeMap<String, bool>,
}

impl PreferenceMap {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stored state for a toggle, if any
    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.get(id).copied()
    }

    /// Set the state for a toggle, replacing any previous entry
    pub fn set(&mut self, id: impl Into<String>, checked: bool) {
        self.entries.insert(id.into(), checked);
    }

    /// Check whether a toggle has a stored entry
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries as (identifier, checked) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(id, checked)| (id.as_str(), *checked))
    }
}

impl FromIterator<(String, bool)> for PreferenceMap {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
