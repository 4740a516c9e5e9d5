//! Application State
//!
//! One [`AppState`] instance lives in the Leptos context and bundles the
//! persisted stores with the reactive shell state (auth status, active
//! module, imprint popup).

pub mod locale;
pub mod session;
pub mod storage;
pub mod theme;
pub mod version;

use std::rc::Rc;

use leptos::{create_rw_signal, provide_context, use_context, RwSignal, SignalSet};

pub use locale::LocaleStore;
pub use session::{AuthGate, UserType};
pub use storage::{BrowserStore, KeyValueStore, MemoryStore};
pub use theme::ThemeStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Rc<dyn KeyValueStore>,
    pub auth: AuthGate,
    pub locale: LocaleStore,
    pub theme: ThemeStore,
    /// Mirror of the auth status driving routing guards.
    pub logged_in: RwSignal<bool>,
    /// Module id highlighted across sidenav, bottom bar and overflow popup.
    pub active_module: RwSignal<&'static str>,
    /// Deployed version shown in the statusbar.
    pub app_version: RwSignal<String>,
    pub imprint_open: RwSignal<bool>,
}

impl AppState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            auth: AuthGate::new(Rc::clone(&store)),
            locale: LocaleStore::new(Rc::clone(&store)),
            theme: ThemeStore::new(Rc::clone(&store)),
            store,
            logged_in: create_rw_signal(false),
            active_module: create_rw_signal("dashboard"),
            app_version: create_rw_signal(version::FALLBACK_VERSION.to_string()),
            imprint_open: create_rw_signal(false),
        }
    }

    /// Re-reads the auth status into the reactive mirror.
    pub fn sync_auth(&self) {
        self.logged_in.set(self.auth.is_logged_in());
    }

    /// Single entry point for module activation so every navigation
    /// surface stays in sync.
    pub fn navigate_module(&self, id: &'static str) {
        self.active_module.set(id);
    }
}

pub fn provide_app_state() -> AppState {
    let state = AppState::new(Rc::new(BrowserStore::new()));
    provide_context(state.clone());
    state
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::SignalGetUntracked;

    #[test]
    fn test_navigate_module_updates_shared_state() {
        let runtime = leptos::create_runtime();
        let state = AppState::new(Rc::new(MemoryStore::new()));

        // Activation from the bar and from the overflow popup go through
        // the same signal, so every surface reads the same active id.
        state.navigate_module("messages");
        assert_eq!(state.active_module.get_untracked(), "messages");

        state.navigate_module("shop");
        assert_eq!(state.active_module.get_untracked(), "shop");

        runtime.dispose();
    }

    #[test]
    fn test_sync_auth_mirrors_session() {
        let runtime = leptos::create_runtime();
        let state = AppState::new(Rc::new(MemoryStore::new()));

        state.sync_auth();
        assert!(!state.logged_in.get_untracked());

        assert!(state.auth.login("erika", "secret", UserType::Patient, false));
        state.sync_auth();
        assert!(state.logged_in.get_untracked());

        state.auth.logout();
        state.sync_auth();
        assert!(!state.logged_in.get_untracked());

        runtime.dispose();
    }
}
