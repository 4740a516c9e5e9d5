//! Application Root
//!
//! Boots the persisted stores, restores the session once per page load,
//! checks the deployed version and wires up the routes.

use std::rc::Rc;

use leptos::*;
use leptos_router::{Redirect, Route, Router, Routes};
use web_sys::console;

use crate::api::fetch_version;
use crate::components::ImprintPopup;
use crate::pages::{Dashboard, Login};
use crate::state::{provide_app_state, version};

/// Removes the static boot fallback from `index.html`. Called once the
/// application mounts; if bootstrap panics earlier, the fallback message
/// and its reload link stay visible.
fn clear_boot_fallback() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(fallback) = document.get_element_by_id("boot-fallback") {
            fallback.remove();
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    clear_boot_fallback();

    let state = provide_app_state();

    state.theme.init();
    state.locale.init();

    // One automatic restore attempt per page load.
    state.logged_in.set(state.auth.ensure_session());

    {
        let app_version = state.app_version;
        let store = Rc::clone(&state.store);
        spawn_local(async move {
            match fetch_version().await {
                Ok(info) => {
                    if version::check_version_update(store.as_ref(), &info.version) {
                        console::log_1(
                            &format!("Cleared cached state for version {}", info.version).into(),
                        );
                    }
                    app_version.set(info.version);
                }
                Err(e) => console::warn_1(&format!("Version manifest unavailable: {}", e).into()),
            }
        });
    }

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=Login/>
                <Route path="/" view=Dashboard/>
                <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
            </Routes>
        </Router>
        <ImprintPopup/>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_boot_fallback_is_removed_on_start() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let fallback = document.create_element("div").unwrap();
        fallback.set_id("boot-fallback");
        body.append_child(&fallback).unwrap();
        assert!(document.get_element_by_id("boot-fallback").is_some());

        clear_boot_fallback();

        assert!(document.get_element_by_id("boot-fallback").is_none());
    }
}
