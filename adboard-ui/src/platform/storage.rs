//! `window.localStorage` as a preference store

use adboard::error::{DashboardError, DashboardResult};
use adboard::preferences::PreferenceStore;
use wasm_bindgen::JsValue;

pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Bind to the window's local storage. Private browsing modes may not
    /// offer one; reads then see nothing and writes fail.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"Local storage unavailable, theme will not persist".into());
        }
        Self { storage }
    }
}

fn js_error(err: JsValue) -> DashboardError {
    DashboardError::Preference(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => Err(DashboardError::Preference(
                "local storage unavailable".to_string(),
            )),
        }
    }
}
