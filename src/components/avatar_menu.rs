//! Avatar Menu
//!
//! Dropdown behind the titlebar avatar: theme and language pickers plus
//! the account entries for the current shell context.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::Icon;
use crate::state::{locale, theme, use_app_state};

#[component]
pub fn AvatarMenu(
    /// Whether an authenticated session is active. Decides which menu
    /// entries show.
    #[prop(optional)]
    session: bool,
) -> impl IntoView {
    let state = use_app_state();
    let open = create_rw_signal(false);

    // Any click outside the menu closes it; the toggle and the panel stop
    // propagation so interacting with them does not.
    let outside_click = window_event_listener(ev::click, move |_| open.set(false));
    on_cleanup(move || outside_click.remove());

    let toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        open.update(|o| *o = !*o);
    };

    let theme_state = state.theme.clone();
    let on_theme = move |ev: ev::Event| {
        theme_state.set_theme(&event_target_value(&ev));
    };

    let locale_state = state.locale.clone();
    let on_language = move |ev: ev::Event| {
        locale_state.set_language(&event_target_value(&ev));
    };

    let t = {
        let locale = state.locale.clone();
        move |key: &str| {
            let locale = locale.clone();
            let key = key.to_string();
            move || locale.t(&key)
        }
    };

    let current_theme = state.theme.theme;
    let current_language = state.locale.language;

    let entries = if session {
        let nav_state = state.clone();
        let navigate = use_navigate();
        view! {
            <div class="avatar-menu-item">
                <Icon name="profile"/>
                <span>{t("avatarMenu.profile")}</span>
            </div>
            <div class="avatar-menu-item">
                <Icon name="settings"/>
                <span>{t("avatarMenu.settings")}</span>
            </div>
            <div class="avatar-menu-item">
                <Icon name="help"/>
                <span>{t("avatarMenu.help")}</span>
            </div>
            <div
                class="avatar-menu-item"
                on:click={
                    let imprint_open = nav_state.imprint_open;
                    move |_| imprint_open.set(true)
                }
            >
                <Icon name="imprint"/>
                <span>{t("avatarMenu.imprint")}</span>
            </div>
            <div
                class="avatar-menu-item avatar-menu-logout"
                on:click=move |_| {
                    nav_state.auth.logout();
                    nav_state.sync_auth();
                    navigate("/login", Default::default());
                }
            >
                <Icon name="logout"/>
                <span>{t("avatarMenu.logout")}</span>
            </div>
        }
        .into_view()
    } else {
        let imprint_open = state.imprint_open;
        view! {
            <div class="avatar-menu-item">
                <Icon name="help"/>
                <span>{t("avatarMenu.help")}</span>
            </div>
            <div class="avatar-menu-item">
                <Icon name="mail"/>
                <span>{t("avatarMenu.contact")}</span>
            </div>
            <div class="avatar-menu-item" on:click=move |_| imprint_open.set(true)>
                <Icon name="imprint"/>
                <span>{t("avatarMenu.imprint")}</span>
            </div>
        }
        .into_view()
    };

    view! {
        <div class="avatar-menu">
            <button class="avatar-menu-toggle" on:click=toggle>
                <Icon name="user" class="avatar-icon"/>
            </button>
            <div
                class="avatar-menu-panel"
                class:open=move || open.get()
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="avatar-menu-section">
                    <label>{t("avatarMenu.theme")}</label>
                    <select on:change=on_theme prop:value=move || current_theme.get()>
                        {theme::THEMES
                            .iter()
                            .map(|&name| {
                                let label = t(&format!("themes.{}", name));
                                view! {
                                    <option value=name>{label}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="avatar-menu-section">
                    <label>{t("avatarMenu.language")}</label>
                    <select on:change=on_language prop:value=move || current_language.get()>
                        {locale::LANGUAGE_LABELS
                            .iter()
                            .map(|&(code, label)| {
                                view! {
                                    <option value=code>{label}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="avatar-menu-divider"></div>
                {entries}
            </div>
        </div>
    }
}
