//! Browser Key-Value Storage
//!
//! Thin abstraction over `localStorage` so the auth gate, locale store and
//! theme store can be exercised in native tests with an in-memory stand-in.

use std::cell::RefCell;
use std::collections::HashMap;

/// Namespace prefix shared by every persisted key.
pub const KEY_PREFIX: &str = "vitaport_";

pub const KEY_SESSION: &str = "vitaport_session";
pub const KEY_SESSION_EXPIRES: &str = "vitaport_session_expires";
pub const KEY_USER_TYPE: &str = "vitaport_usertype";
pub const KEY_USERNAME: &str = "vitaport_username";
pub const KEY_ACCESS_TOKEN: &str = "vitaport_access_token";
pub const KEY_REMEMBER_TOKEN: &str = "vitaport_remember_token";
pub const KEY_REMEMBER_CHOICE: &str = "vitaport_remember_choice";
pub const KEY_LAST_LOGIN_TYPE: &str = "vitaport_last_login_type";
pub const KEY_SIDENAV_COLLAPSED: &str = "vitaport_sidenav_collapsed";
pub const KEY_THEME: &str = "vitaport_theme";
pub const KEY_LANGUAGE: &str = "vitaport_language";
pub const KEY_VERSION: &str = "vitaport_version";

/// String-only key-value capability backing all persisted state.
///
/// Calls are synchronous and atomic; a store that is unavailable (private
/// browsing, disabled storage) degrades to empty reads and dropped writes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn keys(&self) -> Vec<String>;
}

/// `localStorage`-backed store used by the running application.
#[derive(Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        let Some(storage) = Self::storage() else {
            return Vec::new();
        };
        let len = storage.length().unwrap_or(0);
        (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .collect()
    }
}

/// In-memory store for native tests.
#[derive(Default)]
pub struct MemoryStore {
    data: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.data.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.data.borrow_mut().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.data.borrow().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(KEY_THEME), None);

        store.set(KEY_THEME, "dark");
        assert_eq!(store.get(KEY_THEME), Some("dark".to_string()));

        store.remove(KEY_THEME);
        assert_eq!(store.get(KEY_THEME), None);
    }

    #[test]
    fn test_memory_store_keys() {
        let store = MemoryStore::new();
        store.set(KEY_THEME, "light");
        store.set(KEY_LANGUAGE, "en");

        let mut keys = store.keys();
        keys.sort();
        assert_eq!(keys, vec![KEY_LANGUAGE.to_string(), KEY_THEME.to_string()]);
    }
}
