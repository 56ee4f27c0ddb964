//! Picker Settings
//!
//! Behavior switches the host application exposes to its operators.

/// Settings controlling how toggles are initialized at bind time.
#[derive(Debug, Clone)]
pub struct PickerSettings {
    /// Apply stored preferences when binding. When false, stored state is
    /// ignored and only declared/default states apply, though the working
    /// mapping is still persisted.
    pub restore: bool,

    /// Language codes enabled by default. When set, a toggle with no
    /// stored entry is checked iff its code is listed, overriding the
    /// state the host declared.
    pub default_enabled: Option<Vec<String>>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            restore: true,
            default_enabled: None,
        }
    }
}

impl PickerSettings {
    /// Set whether stored preferences are applied at bind time
    pub fn restore(mut self, restore: bool) -> Self {
        self.restore = restore;
        self
    }

    /// Set the language codes enabled by default
    pub fn default_enabled<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_enabled = Some(codes.into_iter().map(Into::into).collect());
        self
    }
}
