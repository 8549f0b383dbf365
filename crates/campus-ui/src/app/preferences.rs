//! Local storage and embedded configuration for the page.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};

use crate::app::dom;
use crate::config::{BehaviorConfig, CONFIG_ELEMENT_ID};
use crate::core::prefs::PreferenceStore;
use crate::error::UiResult;

/// `localStorage` with raw (not JSON-encoded) string values, so the stored
/// theme stays readable by the site's other scripts.
pub(crate) struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> UiResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| dom::host_error("localStorage.setItem", &err))
    }
}

pub(crate) fn load_config() -> BehaviorConfig {
    let Some(element) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return BehaviorConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match BehaviorConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("page behavior config rejected; using defaults", format!("{err:?}"));
            BehaviorConfig::default()
        }
    }
}
