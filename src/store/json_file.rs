//! JSON file store
//!
//! One JSON file under the platform data directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::prefs::PreferenceMap;

use super::PreferenceStore;

/// Filename of the single stored value
const STORAGE_FILE: &str = "language_toggles.json";

/// File-backed preference store.
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/locale-picker/`
/// - **macOS**: `~/Library/Application Support/org.locale-picker.locale-picker/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\locale-picker\locale-picker\data\`
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store under the platform data directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: get_or_create_data_dir()?.join(STORAGE_FILE),
        })
    }

    /// Create a store under an explicit directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(STORAGE_FILE),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> PreferenceMap {
        let Ok(content) = fs::read_to_string(&self.path) else {
            trace!(path = %self.path.display(), "no stored preferences");
            return PreferenceMap::new();
        };

        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(err) => {
                debug!(%err, "stored preferences unreadable, treating as empty");
                PreferenceMap::new()
            }
        }
    }

    fn save(&self, map: &PreferenceMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content)?;
        trace!(path = %self.path.display(), entries = map.len(), "preferences saved");
        Ok(())
    }
}

/// Get or create the crate's data directory
fn get_or_create_data_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("org", "locale-picker", "locale-picker") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
