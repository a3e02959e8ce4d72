//! Browser bindings: storage, address bar, embedded config, and alerts.
//!
//! Every function degrades to a no-op (or `None`) when the relevant browser
//! object is unavailable.

use tagdeck_core::{Error, KeyValueStore, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Element id of the optional JSON config embedded by the host page.
pub const CONFIG_ELEMENT_ID: &str = "tagdeck-config";

/// [`KeyValueStore`] backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| Error::Storage(js_error_message(&e)))?
            .ok_or_else(|| Error::Storage("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(js_error_message(&e)))
    }
}

/// Current `location.search`, including the leading `?` when non-empty.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the query string without adding a history entry.
///
/// Path and fragment are kept.
pub fn replace_search(search: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    let url = format!("{path}{search}{hash}");

    let result = window
        .history()
        .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if let Err(e) = result {
        leptos::logging::warn!("Failed to update address bar: {}", js_error_message(&e));
    }
}

/// Call `handler` on every `popstate` event for the lifetime of the page.
pub fn on_popstate<F>(handler: F)
where
    F: Fn() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| handler());
    if let Err(e) =
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
    {
        leptos::logging::warn!("Failed to listen for popstate: {}", js_error_message(&e));
        return;
    }
    // The listener lives as long as the page
    closure.forget();
}

/// Text of the host page's embedded config element, if present.
pub fn embedded_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && let Err(e) = window.alert_with_message(message)
    {
        leptos::logging::error!("Failed to show alert: {}", js_error_message(&e));
    }
}

/// Best-effort message for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
