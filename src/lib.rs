//! Locale Picker Library
//!
//! Per-language visibility toggles whose enabled set persists across
//! sessions. The host UI renders the checkboxes; this crate decides their
//! initial state from stored preferences and records every change back to
//! the store.

pub mod binder;
pub mod error;
pub mod language;
pub mod prefs;
pub mod settings;
pub mod store;
