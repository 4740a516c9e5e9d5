//! Titlebar
//!
//! Top bar with brand mark, the context-aware search field and the avatar
//! menu. On the dashboard overview the search field switches into command
//! mode with its own icon and placeholder.

use leptos::*;

use crate::components::{AvatarMenu, Icon};
use crate::state::use_app_state;

#[component]
pub fn Titlebar(
    /// Show the search field (dashboard shell only).
    #[prop(optional)]
    search: bool,
    /// Authenticated session context, forwarded to the avatar menu.
    #[prop(optional)]
    session: bool,
) -> impl IntoView {
    view! {
        <header class="titlebar">
            <div class="titlebar-brand">
                <Icon name="logo" class="titlebar-brand-icon"/>
                <span class="titlebar-brand-name">"Vitaport"</span>
            </div>
            {search.then(|| view! { <SearchField/> })}
            <AvatarMenu session=session/>
        </header>
    }
}

/// Search input that doubles as a command palette on the overview module.
#[component]
fn SearchField() -> impl IntoView {
    let state = use_app_state();
    let query = create_rw_signal(String::new());

    let active = state.active_module;
    let command_mode = move || active.get() == "dashboard";

    let icon_name = Signal::derive(move || {
        if command_mode() {
            "search_overview".to_string()
        } else {
            "search".to_string()
        }
    });

    let locale = state.locale.clone();
    let placeholder = move || {
        if command_mode() {
            locale.t("search.actionOrCommand")
        } else {
            locale.t("search.placeholder")
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        // Commands are fire-and-forget; the field resets after Enter.
        if ev.key() == "Enter" && command_mode() {
            query.set(String::new());
        }
    };

    view! {
        <div class="titlebar-search">
            <Icon name=icon_name class="titlebar-search-icon"/>
            <input
                type="text"
                class="titlebar-search-input"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="titlebar-search-clear"
                class=("is-visible", move || !query.get().is_empty())
                on:click=move |_| query.set(String::new())
            >
                <Icon name="close"/>
            </button>
        </div>
    }
}
