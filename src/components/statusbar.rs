//! Statusbar
//!
//! Bottom strip of the shell. Outside a session it shows copyright and
//! the deployed release; inside a session it shows the active module, the
//! signed-in user and a wall clock.

use chrono::Local;
use gloo_timers::callback::Interval;
use leptos::*;

use crate::state::use_app_state;

fn clock_text() -> String {
    Local::now().format("%H:%M").to_string()
}

#[component]
pub fn Statusbar(
    /// Authenticated session context.
    #[prop(optional)]
    session: bool,
) -> impl IntoView {
    let state = use_app_state();

    if !session {
        let version = state.app_version;
        let year = Local::now().format("%Y").to_string();
        return view! {
            <footer class="statusbar">
                <span class="statusbar-copyright">{format!("© {} Vitaport", year)}</span>
                <span class="statusbar-version">{move || format!("v{}", version.get())}</span>
            </footer>
        }
        .into_view();
    }

    let active = state.active_module;
    let locale = state.locale.clone();
    let module_label = move || locale.t(&format!("modules.{}", active.get()));
    let username = state.auth.username().unwrap_or_default();

    // The module icon swaps in place as the active module changes.
    let icon_ref = create_node_ref::<html::Span>();
    create_effect(move |_| {
        let id = active.get();
        if let Some(el) = icon_ref.get() {
            crate::icons::apply(&el, id);
        }
    });

    // Minute-level clock; the half-minute tick keeps drift invisible.
    let (time, set_time) = create_signal(clock_text());
    let ticker = Interval::new(30_000, move || set_time.set(clock_text()));
    on_cleanup(move || drop(ticker));

    view! {
        <footer class="statusbar statusbar-session">
            <span class="statusbar-module">
                <span class="statusbar-module-icon" node_ref=icon_ref></span>
                {module_label}
            </span>
            <span class="statusbar-user">{username}</span>
            <span class="statusbar-clock">{move || time.get()}</span>
        </footer>
    }
    .into_view()
}
