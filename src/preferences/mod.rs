//! Preference Store
//!
//! A tiny key-value surface the dashboard persists its theme choice to.
//! The browser frontend backs it with `localStorage`; the CLI uses a JSON
//! file; tests use the in-memory store.

mod memory;

#[cfg(feature = "native")]
mod file;

pub use memory::MemoryStore;

#[cfg(feature = "native")]
pub use file::FileStore;

use crate::error::DashboardResult;

/// Key the theme preference is stored under
pub const THEME_KEY: &str = "theme";

/// String-keyed, string-valued persistence surface
pub trait PreferenceStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> DashboardResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        (**self).set(key, value)
    }
}
