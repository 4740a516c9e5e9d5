//! Side Navigation
//!
//! Collapsible module rail for wide viewports. The collapsed state
//! persists across visits, and the collapse toggle is kept aligned with
//! the logout item by the shared layout controller.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::Icon;
use crate::layout::LayoutController;
use crate::modules::{NavModule, LOGOUT};
use crate::state::{storage::KEY_SIDENAV_COLLAPSED, use_app_state};

#[component]
pub fn Sidenav(
    /// Module set for the logged-in user type.
    modules: &'static [NavModule],
) -> impl IntoView {
    let state = use_app_state();
    let layout = use_context::<LayoutController>().expect("LayoutController not provided");

    let collapsed = create_rw_signal(
        state.store.get(KEY_SIDENAV_COLLAPSED).as_deref() == Some("true"),
    );

    let toggle_collapsed = {
        let state = state.clone();
        let layout = layout.clone();
        move |_| {
            let next = !collapsed.get_untracked();
            collapsed.set(next);
            state
                .store
                .set(KEY_SIDENAV_COLLAPSED, if next { "true" } else { "false" });
            layout.request();
        }
    };

    let active = state.active_module;
    let t = {
        let locale = state.locale.clone();
        move |key: &'static str| {
            let locale = locale.clone();
            move || locale.t(key)
        }
    };

    let logo_state = state.clone();
    let logout_state = state.clone();
    let navigate = use_navigate();

    let items = modules
        .iter()
        .map(|module| {
            let state = state.clone();
            let layout = layout.clone();
            let label = t(module.label_key);
            view! {
                <div
                    class="sidenav-item"
                    class:active=move || active.get() == module.id
                    on:click=move |_| {
                        state.navigate_module(module.id);
                        layout.request();
                    }
                >
                    <Icon name=module.icon class="sidenav-item-icon"/>
                    <span class="sidenav-item-label">{label}</span>
                </div>
            }
        })
        .collect_view();

    let anchor = layout.anchor;
    let toggle = layout.toggle;
    view! {
        <nav class="sidenav" class:collapsed=move || collapsed.get()>
            <div class="sidenav-logo" on:click=move |_| logo_state.navigate_module("dashboard")>
                <Icon name="logo" class="sidenav-logo-icon"/>
                <span class="sidenav-logo-label">"Vitaport"</span>
            </div>

            <div class="sidenav-items">{items}</div>

            <div class="sidenav-divider"></div>

            <div
                class="sidenav-item sidenav-logout"
                node_ref=anchor
                on:click=move |_| {
                    logout_state.auth.logout();
                    logout_state.sync_auth();
                    navigate("/login", Default::default());
                }
            >
                <Icon name=LOGOUT.icon class="sidenav-item-icon"/>
                <span class="sidenav-item-label">{t(LOGOUT.label_key)}</span>
            </div>

            <div
                class="sidenav-toggle"
                node_ref=toggle
                on:click=toggle_collapsed
            >
                <Icon name="collapse" class="sidenav-toggle-icon"/>
            </div>
        </nav>
    }
}
