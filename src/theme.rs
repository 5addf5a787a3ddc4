//! Theme Controller
//!
//! Owns the page's dark-mode flag, persists it through a [`PreferenceStore`],
//! and publishes every change to explicit subscribers. The chart subscribes
//! once at startup instead of watching the page root for class changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DashboardResult;
use crate::preferences::{PreferenceStore, THEME_KEY};

/// Visual mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal value written to the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value. Only `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}', expected light or dark", other)),
        }
    }
}

/// Handle returned by [`ThemeController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Theme)>;

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    theme: Theme,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the stored preference under the default key and apply it
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, THEME_KEY)
    }

    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = match store.get(&key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        tracing::info!(%theme, "Loaded theme preference");

        Self {
            store,
            key,
            theme,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip the mode, persist it, and notify subscribers.
    ///
    /// A failed write is logged; the in-memory mode still changes so the page
    /// keeps responding when storage is unavailable.
    pub fn toggle(&mut self) -> Theme {
        let theme = self.theme.toggled();
        if let Err(e) = self.set(theme) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        theme
    }

    /// Apply a specific mode. Returns the store's error after notifying.
    pub fn set(&mut self, theme: Theme) -> DashboardResult<()> {
        self.theme = theme;
        let persisted = self.store.set(&self.key, theme.as_str());
        self.notify();
        persisted
    }

    /// Register a listener called with the new mode after every change
    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn notify(&mut self) {
        let theme = self.theme;
        tracing::debug!(%theme, listeners = self.listeners.len(), "Theme changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(theme);
        }
    }
}
