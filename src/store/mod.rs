//! Preference storage port and backends.
//!
//! A store holds one serialized text value under a fixed slot, the way
//! origin-scoped browser storage holds one value per key. All instances
//! pointing at the same slot share it; last write wins.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::prefs::PreferenceMap;

/// Durable persistence for toggle preferences.
pub trait PreferenceStore {
    /// Read the stored mapping.
    ///
    /// Never fails: an absent or unparsable value reads as an empty
    /// mapping, indistinguishable from one that was stored empty.
    fn load(&self) -> PreferenceMap;

    /// Serialize the mapping and overwrite the stored value
    /// unconditionally. No merge, no versioning.
    fn save(&self, map: &PreferenceMap) -> Result<()>;
}
