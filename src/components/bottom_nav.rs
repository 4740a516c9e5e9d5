//! Bottom Navigation
//!
//! Module bar for narrow viewports. Items that do not fit the measured
//! width move into an overflow popup behind a trigger button; the split
//! follows [`crate::layout::compute_overflow`].

use leptos::*;

use crate::components::Icon;
use crate::layout::{compute_overflow, LayoutController};
use crate::modules::NavModule;
use crate::state::use_app_state;

#[component]
pub fn BottomNav(
    /// Module set for the logged-in user type.
    modules: &'static [NavModule],
) -> impl IntoView {
    let state = use_app_state();
    let layout = use_context::<LayoutController>().expect("LayoutController not provided");

    let popup_open = create_rw_signal(false);

    // A click anywhere outside closes the popup; the trigger stops
    // propagation so toggling works.
    let outside_click = window_event_listener(ev::click, move |_| popup_open.set(false));
    on_cleanup(move || outside_click.remove());

    let nav_width = layout.nav_width;
    let item_count = modules.len();
    let split = create_memo(move |_| compute_overflow(item_count, nav_width.get()));

    // First measurement once the bar is in the DOM.
    {
        let layout = layout.clone();
        let bar = layout.bar;
        create_effect(move |_| {
            if bar.get().is_some() {
                layout.request();
            }
        });
    }

    let active = state.active_module;
    let t = {
        let locale = state.locale.clone();
        move |key: &'static str| {
            let locale = locale.clone();
            move || locale.t(key)
        }
    };

    let bar_items = modules
        .iter()
        .enumerate()
        .map(|(idx, module)| {
            let state = state.clone();
            let layout = layout.clone();
            let label = t(module.label_key);
            view! {
                <div
                    class="bottom-nav-item"
                    class:active=move || active.get() == module.id
                    style:display=move || {
                        if idx < split.get().visible_count { "flex" } else { "none" }
                    }
                    on:click=move |_| {
                        state.navigate_module(module.id);
                        popup_open.set(false);
                        layout.request();
                    }
                >
                    <Icon name=module.icon class="bottom-nav-item-icon"/>
                    <span class="bottom-nav-item-label">{label}</span>
                </div>
            }
        })
        .collect_view();

    let popup_items = modules
        .iter()
        .enumerate()
        .map(|(idx, module)| {
            let state = state.clone();
            let layout = layout.clone();
            let label = t(module.label_key);
            view! {
                <div
                    class="bottom-nav-popup-item"
                    class:active=move || active.get() == module.id
                    style:display=move || {
                        if idx >= split.get().visible_count { "flex" } else { "none" }
                    }
                    on:click=move |_| {
                        state.navigate_module(module.id);
                        popup_open.set(false);
                        layout.request();
                    }
                >
                    <Icon name=module.icon class="bottom-nav-popup-icon"/>
                    <span>{label}</span>
                </div>
            }
        })
        .collect_view();

    let bar = layout.bar;
    view! {
        <nav
            class="bottom-nav"
            node_ref=bar
            class=("is-ready", move || nav_width.get() > 0.0)
        >
            {bar_items}
            <div
                class="bottom-nav-overflow"
                style:display=move || {
                    if split.get().overflow_button { "flex" } else { "none" }
                }
                on:click=move |ev| {
                    ev.stop_propagation();
                    popup_open.update(|o| *o = !*o);
                }
            >
                <Icon name="dropdown" class="bottom-nav-overflow-icon"/>
            </div>
            <div class="bottom-nav-popup" class:show=move || popup_open.get()>
                {popup_items}
            </div>
        </nav>
    }
}
