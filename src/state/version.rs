//! Version Tracking
//!
//! Compares the deployed version against the one recorded at the last
//! visit and clears namespaced storage on a major bump, keeping the keys a
//! user would not expect to lose.

use super::storage::{
    KeyValueStore, KEY_LANGUAGE, KEY_PREFIX, KEY_REMEMBER_CHOICE, KEY_THEME, KEY_VERSION,
};

/// Version assumed when the deployment manifest cannot be fetched.
pub const FALLBACK_VERSION: &str = "1.0.0";

/// Keys that survive a cache clear.
const PRESERVED_KEYS: &[&str] = &[KEY_THEME, KEY_LANGUAGE, KEY_REMEMBER_CHOICE, KEY_VERSION];

fn major(version: &str) -> Option<u64> {
    version.split('.').next()?.parse().ok()
}

/// A cache clear happens only when the major version increases. Patch and
/// minor updates keep stored state.
pub fn should_clear_cache(stored: &str, current: &str) -> bool {
    match (major(stored), major(current)) {
        (Some(old), Some(new)) => new > old,
        _ => false,
    }
}

/// Removes all namespaced keys except [`PRESERVED_KEYS`].
pub fn clear_application_cache(store: &dyn KeyValueStore) {
    for key in store.keys() {
        if key.starts_with(KEY_PREFIX) && !PRESERVED_KEYS.contains(&key.as_str()) {
            store.remove(&key);
        }
    }
}

/// Records `current` as the seen version and clears the cache if the major
/// version moved up since the last visit. Returns whether a clear ran.
pub fn check_version_update(store: &dyn KeyValueStore, current: &str) -> bool {
    let stored = store.get(KEY_VERSION);
    let cleared = match stored.as_deref() {
        Some(stored) if should_clear_cache(stored, current) => {
            clear_application_cache(store);
            true
        }
        _ => false,
    };
    store.set(KEY_VERSION, current);
    cleared
}
