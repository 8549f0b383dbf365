//! Key/value preference storage seam.
//!
//! The browser adapter implements [`PreferenceStore`] over `localStorage`;
//! [`MemoryStore`] backs native tests.

use std::collections::BTreeMap;

use crate::core::theme::ThemeId;
use crate::error::UiResult;

/// String preferences keyed by name.
pub trait PreferenceStore {
    /// Stored value for `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write.
    fn write(&mut self, key: &str, value: &str) -> UiResult<()>;
}

/// In-memory store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> UiResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme identifier to apply at startup: the stored one, or `default`.
#[must_use]
pub fn stored_theme(store: &impl PreferenceStore, key: &str) -> String {
    store
        .read(key)
        .unwrap_or_else(|| ThemeId::Default.as_str().to_string())
}
