//! Theme Selection
//!
//! Persists the chosen theme and mirrors it onto the document root as a
//! `data-theme` attribute for the stylesheets to key on.

use std::rc::Rc;

use leptos::{create_rw_signal, RwSignal, SignalSet};

use super::storage::{KeyValueStore, KEY_THEME};

/// Available theme identifiers.
pub const THEMES: &[&str] = &["light", "dark", "design", "contrast"];

pub const DEFAULT_THEME: &str = "light";

/// Maps any stored value onto a known theme.
pub fn normalize_theme(theme: &str) -> &'static str {
    THEMES
        .iter()
        .find(|&&t| t == theme)
        .copied()
        .unwrap_or(DEFAULT_THEME)
}

#[derive(Clone)]
pub struct ThemeStore {
    store: Rc<dyn KeyValueStore>,
    pub theme: RwSignal<String>,
}

impl ThemeStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            theme: create_rw_signal(DEFAULT_THEME.to_string()),
        }
    }

    /// Applies the persisted theme, or the default for first visits.
    pub fn init(&self) {
        let stored = self.store.get(KEY_THEME);
        self.apply(normalize_theme(stored.as_deref().unwrap_or(DEFAULT_THEME)));
    }

    pub fn set_theme(&self, theme: &str) {
        let theme = normalize_theme(theme);
        self.store.set(KEY_THEME, theme);
        self.apply(theme);
    }

    fn apply(&self, theme: &'static str) {
        self.theme.set(theme.to_string());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-theme", theme);
            }
        }
    }
}
