//! Available languages and their toggle descriptors.

use crate::binder::ToggleDescriptor;

/// One selectable language of the host application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Language code, e.g. "en" or "pt-br"
    pub code: String,
    /// Local display name, e.g. "English"
    pub name: String,
}

impl Language {
    /// Create a language from code and display name
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Identifier of this language's toggle
    pub fn toggle_id(&self) -> String {
        toggle_id(&self.code)
    }
}

/// Toggle identifier for a language code
pub fn toggle_id(code: &str) -> String {
    format!("{code}_checkbox")
}

/// Build one checked-by-default descriptor per language, in order, the way
/// the editor page renders its picker.
pub fn descriptors_for(languages: &[Language]) -> Vec<ToggleDescriptor> {
    languages
        .iter()
        .map(|lang| ToggleDescriptor::new(lang.toggle_id(), true))
        .collect()
}
