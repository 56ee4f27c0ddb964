//! Toggle Binder
//!
//! Synchronizes a set of toggles with the stored Preference Mapping:
//! applies stored state when binding, commits first-visit defaults, and
//! persists every subsequent change.

use tracing::debug;

use crate::error::{Error, Result};
use crate::language;
use crate::prefs::PreferenceMap;
use crate::settings::PickerSettings;
use crate::store::PreferenceStore;

/// A checkbox as the host declared it, before preferences apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleDescriptor {
    /// Unique identifier of the toggle
    pub id: String,
    /// Checked state
    pub checked: bool,
}

impl ToggleDescriptor {
    /// Create a descriptor from identifier and declared state
    pub fn new(id: impl Into<String>, checked: bool) -> Self {
        Self {
            id: id.into(),
            checked,
        }
    }
}

/// Binds a set of toggles to a preference store.
///
/// Holds the toggles' current states after stored preferences were
/// applied; the host reads them back to render, and reports user changes
/// through [`ToggleBinder::on_change`].
pub struct ToggleBinder<S: PreferenceStore> {
    toggles: Vec<ToggleDescriptor>,
    store: S,
}

impl<S: PreferenceStore> ToggleBinder<S> {
    /// Bind toggles with default settings
    pub fn bind(descriptors: Vec<ToggleDescriptor>, store: S) -> Result<Self> {
        Self::bind_with(descriptors, store, &PickerSettings::default())
    }

    /// Bind toggles, applying stored preferences and committing the
    /// resulting states back to the store.
    ///
    /// With no descriptors the store is not touched at all.
    pub fn bind_with(
        descriptors: Vec<ToggleDescriptor>,
        store: S,
        settings: &PickerSettings,
    ) -> Result<Self> {
        let mut toggles = descriptors;

        if toggles.is_empty() {
            return Ok(Self { toggles, store });
        }

        let stored = store.load();
        let mut working = PreferenceMap::new();

        for toggle in &mut toggles {
            let restored = if settings.restore {
                stored.get(&toggle.id)
            } else {
                None
            };

            if let Some(checked) = restored {
                // Stored state wins over the declared default.
                toggle.checked = checked;
            } else if let Some(checked) = default_for(settings, &toggle.id) {
                toggle.checked = checked;
            }

            working.set(toggle.id.clone(), toggle.checked);
        }

        // Commit immediately so first-visit defaults persist.
        store.save(&working)?;
        debug!(toggles = toggles.len(), "toggles bound");

        Ok(Self { toggles, store })
    }

    /// The bound toggles with their current states, in bind order
    pub fn toggles(&self) -> &[ToggleDescriptor] {
        &self.toggles
    }

    /// Current state of one toggle, if bound
    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.toggles
            .iter()
            .find(|toggle| toggle.id == id)
            .map(|toggle| toggle.checked)
    }

    /// Identifiers of the currently enabled toggles, in bind order
    pub fn enabled_ids(&self) -> Vec<&str> {
        self.toggles
            .iter()
            .filter(|toggle| toggle.checked)
            .map(|toggle| toggle.id.as_str())
            .collect()
    }

    /// Record one toggle change and persist it.
    ///
    /// The mapping is re-read from the store rather than from any cached
    /// copy, so entries written by another binding on the same slot
    /// survive. Not safe against concurrent writers; last write wins.
    pub fn on_change(&mut self, id: &str, checked: bool) -> Result<()> {
        let Some(toggle) = self.toggles.iter_mut().find(|toggle| toggle.id == id) else {
            return Err(Error::Invalid {
                message: format!("unknown toggle: {id}"),
            });
        };
        toggle.checked = checked;

        let mut map = self.store.load();
        map.set(id, checked);
        self.store.save(&map)?;

        debug!(enabled = ?self.enabled_ids(), "toggle preferences updated");
        Ok(())
    }
}

fn default_for(settings: &PickerSettings, id: &str) -> Option<bool> {
    let codes = settings.default_enabled.as_ref()?;
    Some(
        codes
            .iter()
            .any(|code| code == id || language::toggle_id(code) == id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn toggle(id: &str, checked: bool) -> ToggleDescriptor {
        ToggleDescriptor::new(id, checked)
    }

    #[test]
    fn first_visit_commits_declared_states() {
        let store = MemoryStore::new();

        let binder = ToggleBinder::bind(
            vec![toggle("fr_checkbox", false), toggle("en_checkbox", true)],
            store.clone(),
        )
        .expect("bind");

        // States on screen are unchanged.
        assert_eq!(binder.is_checked("fr_checkbox"), Some(false));
        assert_eq!(binder.is_checked("en_checkbox"), Some(true));

        // Storage now holds exactly the bound toggles.
        let stored = store.load();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored.get("fr_checkbox"), Some(false));
        assert_eq!(stored.get("en_checkbox"), Some(true));
    }

    #[test]
    fn stored_state_wins_over_declared() {
        let store = MemoryStore::new();
        let mut seeded = PreferenceMap::new();
        seeded.set("fr_checkbox", true);
        store.save(&seeded).expect("seed");

        let binder = ToggleBinder::bind(vec![toggle("fr_checkbox", false)], store.clone())
            .expect("bind");

        assert_eq!(binder.is_checked("fr_checkbox"), Some(true));
        assert_eq!(store.load().get("fr_checkbox"), Some(true));
    }

    #[test]
    fn bind_rewrites_storage_to_bound_toggles() {
        let store = MemoryStore::new();
        let mut seeded = PreferenceMap::new();
        seeded.set("fr_checkbox", true);
        seeded.set("stale_checkbox", true);
        store.save(&seeded).expect("seed");

        ToggleBinder::bind(vec![toggle("fr_checkbox", false)], store.clone()).expect("bind");

        let stored = store.load();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored.get("fr_checkbox"), Some(true));
    }

    #[test]
    fn change_updates_only_that_entry() {
        let store = MemoryStore::new();

        let mut binder = ToggleBinder::bind(
            vec![toggle("fr_checkbox", true), toggle("en_checkbox", true)],
            store.clone(),
        )
        .expect("bind");

        binder.on_change("en_checkbox", false).expect("change");

        let stored = store.load();
        assert_eq!(stored.get("en_checkbox"), Some(false));
        assert_eq!(stored.get("fr_checkbox"), Some(true));
        assert_eq!(binder.is_checked("en_checkbox"), Some(false));
    }

    #[test]
    fn change_preserves_entries_from_other_bindings() {
        let store = MemoryStore::new();

        let mut binder =
            ToggleBinder::bind(vec![toggle("en_checkbox", true)], store.clone()).expect("bind");

        // Another binding on the same slot writes its own entry.
        let mut external = store.load();
        external.set("de_checkbox", true);
        store.save(&external).expect("external write");

        binder.on_change("en_checkbox", false).expect("change");

        let stored = store.load();
        assert_eq!(stored.get("de_checkbox"), Some(true));
        assert_eq!(stored.get("en_checkbox"), Some(false));
    }

    #[test]
    fn no_toggles_means_no_storage_access() {
        let store = MemoryStore::new();

        let binder = ToggleBinder::bind(Vec::new(), store.clone()).expect("bind");

        assert!(binder.toggles().is_empty());
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn malformed_stored_data_reads_as_first_visit() {
        let store = MemoryStore::with_raw("{broken");

        let binder =
            ToggleBinder::bind(vec![toggle("en_checkbox", true)], store.clone()).expect("bind");

        assert_eq!(binder.is_checked("en_checkbox"), Some(true));
        assert_eq!(store.load().get("en_checkbox"), Some(true));
    }

    #[test]
    fn unknown_toggle_is_rejected_without_write() {
        let store = MemoryStore::new();

        let mut binder =
            ToggleBinder::bind(vec![toggle("en_checkbox", true)], store.clone()).expect("bind");
        let before = store.raw();

        let result = binder.on_change("nope_checkbox", true);

        assert!(matches!(result, Err(Error::Invalid { .. })));
        assert_eq!(store.raw(), before);
    }

    #[test]
    fn restore_off_ignores_stored_state() {
        let store = MemoryStore::new();
        let mut seeded = PreferenceMap::new();
        seeded.set("fr_checkbox", true);
        store.save(&seeded).expect("seed");

        let settings = PickerSettings::default().restore(false);
        let binder =
            ToggleBinder::bind_with(vec![toggle("fr_checkbox", false)], store.clone(), &settings)
                .expect("bind");

        assert_eq!(binder.is_checked("fr_checkbox"), Some(false));
        assert_eq!(store.load().get("fr_checkbox"), Some(false));
    }

    #[test]
    fn default_enabled_decides_unstored_toggles() {
        let store = MemoryStore::new();

        let settings = PickerSettings::default().default_enabled(["fr"]);
        let binder = ToggleBinder::bind_with(
            vec![toggle("fr_checkbox", false), toggle("en_checkbox", true)],
            store,
            &settings,
        )
        .expect("bind");

        assert_eq!(binder.is_checked("fr_checkbox"), Some(true));
        assert_eq!(binder.is_checked("en_checkbox"), Some(false));
    }

    #[test]
    fn stored_state_wins_over_default_enabled() {
        let store = MemoryStore::new();
        let mut seeded = PreferenceMap::new();
        seeded.set("fr_checkbox", false);
        store.save(&seeded).expect("seed");

        let settings = PickerSettings::default().default_enabled(["fr"]);
        let binder =
            ToggleBinder::bind_with(vec![toggle("fr_checkbox", true)], store, &settings)
                .expect("bind");

        assert_eq!(binder.is_checked("fr_checkbox"), Some(false));
    }

    #[test]
    fn preferences_survive_rebinding() {
        let store = MemoryStore::new();

        let mut binder = ToggleBinder::bind(
            vec![toggle("fr_checkbox", true), toggle("en_checkbox", true)],
            store.clone(),
        )
        .expect("bind");
        binder.on_change("en_checkbox", false).expect("change");
        drop(binder);

        // Next session declares the same markup defaults.
        let rebound = ToggleBinder::bind(
            vec![toggle("fr_checkbox", true), toggle("en_checkbox", true)],
            store,
        )
        .expect("rebind");

        assert_eq!(rebound.is_checked("fr_checkbox"), Some(true));
        assert_eq!(rebound.is_checked("en_checkbox"), Some(false));
    }

    #[test]
    fn enabled_ids_follow_bind_order() {
        let store = MemoryStore::new();

        let mut binder = ToggleBinder::bind(
            vec![
                toggle("fr_checkbox", true),
                toggle("en_checkbox", false),
                toggle("de_checkbox", true),
            ],
            store,
        )
        .expect("bind");

        assert_eq!(binder.enabled_ids(), vec!["fr_checkbox", "de_checkbox"]);

        binder.on_change("en_checkbox", true).expect("change");
        assert_eq!(
            binder.enabled_ids(),
            vec!["fr_checkbox", "en_checkbox", "de_checkbox"]
        );
    }
}
