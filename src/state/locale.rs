//! Localization
//!
//! Loads translation catalogues from `assets/locales/{code}.json`, resolves
//! dotted keys and persists the selected language. Missing keys render as
//! the literal key so untranslated spots are visible instead of blank.

use std::rc::Rc;

use leptos::{create_rw_signal, spawn_local, RwSignal, SignalGet, SignalSet};
use serde_json::Value;
use web_sys::console;

use super::storage::{KeyValueStore, KEY_LANGUAGE};

/// Supported language codes.
pub const LANGUAGES: &[&str] = &["de", "en", "fr", "es", "it", "ru", "uk", "nl", "sv"];

pub const DEFAULT_LANGUAGE: &str = "en";

/// Native display names, for the language picker.
pub const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("de", "Deutsch"),
    ("en", "English"),
    ("fr", "Français"),
    ("es", "Español"),
    ("it", "Italiano"),
    ("ru", "Русский"),
    ("uk", "Українська"),
    ("nl", "Nederlands"),
    ("sv", "Svenska"),
];

/// Maps any stored or requested code onto a supported one.
pub fn normalize_language(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|&&l| l == code)
        .copied()
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Resolves a dotted path like `login.errorInvalidCredentials` inside a
/// translation catalogue.
pub fn lookup_path<'a>(catalogue: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = catalogue;
    for part in key.split('.') {
        node = node.get(part)?;
    }
    node.as_str()
}

/// Reactive language selection plus the loaded catalogue.
#[derive(Clone)]
pub struct LocaleStore {
    store: Rc<dyn KeyValueStore>,
    pub language: RwSignal<String>,
    translations: RwSignal<Value>,
}

impl LocaleStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            language: create_rw_signal(DEFAULT_LANGUAGE.to_string()),
            translations: create_rw_signal(Value::Null),
        }
    }

    /// Applies the persisted language (or the default) and loads its
    /// catalogue.
    pub fn init(&self) {
        let stored = self.store.get(KEY_LANGUAGE);
        let code = normalize_language(stored.as_deref().unwrap_or(DEFAULT_LANGUAGE));
        self.apply(code);
    }

    /// Switches the language, persists the choice and reloads the
    /// catalogue. Rapid switches resolve last-write-wins.
    pub fn set_language(&self, code: &str) {
        let code = normalize_language(code);
        self.store.set(KEY_LANGUAGE, code);
        self.apply(code);
    }

    /// Translates a dotted key; unresolved keys come back verbatim.
    pub fn t(&self, key: &str) -> String {
        let catalogue = self.translations.get();
        lookup_path(&catalogue, key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    fn apply(&self, code: &'static str) {
        self.language.set(code.to_string());

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("lang", code);
            }
        }

        let translations = self.translations;
        spawn_local(async move {
            match load_catalogue(code).await {
                Ok(value) => translations.set(value),
                Err(e) => console::error_1(&format!("Failed to load locale {code}: {e}").into()),
            }
        });
    }
}

/// Fetches a catalogue, falling back to the default language once if the
/// requested one is unavailable.
async fn load_catalogue(code: &str) -> Result<Value, String> {
    match crate::api::fetch_translations(code).await {
        Ok(value) => Ok(value),
        Err(e) if code != DEFAULT_LANGUAGE => {
            console::warn_1(
                &format!("Locale {code} unavailable ({e}), falling back to {DEFAULT_LANGUAGE}")
                    .into(),
            );
            crate::api::fetch_translations(DEFAULT_LANGUAGE).await
        }
        Err(e) => Err(e),
    }
}
