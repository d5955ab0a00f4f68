//! Browser localStorage helpers for UI state persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the layout can
//! persist the navigation region's state without repeating web-sys glue.
//! [`BrowserStateStore`] adapts them to the layout's [`StateStore`] seam.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::state::layout::StateStore;

/// Prefix applied to every key written by [`BrowserStateStore`].
pub const KEY_PREFIX: &str = "scm_console:";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if let Err(e) = storage.set_item(key, &raw) {
            log::warn!("ui state save failed for {key}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Storage key for a component identity.
pub fn storage_key(component_id: &str) -> String {
    format!("{KEY_PREFIX}{component_id}")
}

/// [`StateStore`] backed by `localStorage`. Outside the browser every load
/// misses and every save is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStateStore;

impl StateStore for BrowserStateStore {
    fn load(&self, key: &str) -> Option<Value> {
        load_json(&storage_key(key))
    }

    fn save(&mut self, key: &str, value: Value) {
        save_json(&storage_key(key), &value);
    }
}
