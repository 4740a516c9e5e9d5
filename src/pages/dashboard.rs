//! Dashboard Page
//!
//! Authenticated shell: sidenav, titlebar with command search, module
//! content area, bottom navigation and the session statusbar. Owns the
//! layout controller so both navigation surfaces share one measurement
//! pass per frame.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{BottomNav, Icon, Sidenav, Statusbar, Titlebar};
use crate::layout::LayoutController;
use crate::modules::modules_for;
use crate::state::use_app_state;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();

    // The session may have expired while the tab was open.
    if !state.auth.is_logged_in() {
        state.logged_in.set(false);
    }

    {
        let logged_in = state.logged_in;
        let navigate = use_navigate();
        create_effect(move |_| {
            if !logged_in.get() {
                navigate("/login", Default::default());
            }
        });
    }

    let user_type = state.auth.user_type().unwrap_or_default();
    let modules = modules_for(user_type);

    let layout = LayoutController::new();
    provide_context(layout.clone());

    let resize = window_event_listener(ev::resize, {
        let layout = layout.clone();
        move |_| layout.request()
    });
    on_cleanup(move || resize.remove());

    let active = state.active_module;
    let locale = state.locale.clone();
    let content_title = {
        let locale = locale.clone();
        move || locale.t(&format!("modules.{}", active.get()))
    };
    let content_text = {
        let locale = locale.clone();
        move || locale.t("dashboard.content")
    };
    // The primary actions follow the active module: widgets on the
    // overview, a generic create action everywhere else.
    let cta_label = {
        let locale = locale.clone();
        move || {
            if active.get() == "dashboard" {
                locale.t("buttons.addWidget")
            } else {
                locale.t("buttons.new")
            }
        }
    };
    let fab_icon = Signal::derive(move || {
        if active.get() == "dashboard" {
            "add".to_string()
        } else {
            "edit".to_string()
        }
    });
    let fab_label = move || {
        if active.get() == "dashboard" {
            locale.t("buttons.addWidget")
        } else {
            locale.t("buttons.new")
        }
    };

    view! {
        <div class="shell shell-dashboard">
            <Sidenav modules=modules/>

            <div class="shell-main">
                <Titlebar search=true session=true/>

                <div class="toolbar">
                    <button class="toolbar-cta">
                        <Icon name="add" class="toolbar-cta-icon"/>
                        <span>{cta_label}</span>
                    </button>
                </div>

                <main class="content">
                    <h1 class="content-title">{content_title}</h1>
                    <p class="content-text">{content_text}</p>
                </main>

                <button class="fab">
                    <Icon name=fab_icon class="fab-icon"/>
                    <span class="fab-label">{fab_label}</span>
                </button>

                <BottomNav modules=modules/>
                <Statusbar session=true/>
            </div>
        </div>
    }
}
