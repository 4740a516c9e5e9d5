//! Login Page
//!
//! Credential form with user-type switching, password visibility toggle
//! and remember-me. The last selected user type and a remembered username
//! prefill the form on the next visit.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{Icon, Statusbar, Titlebar};
use crate::state::{use_app_state, UserType};

#[component]
pub fn Login() -> impl IntoView {
    let state = use_app_state();

    // Already signed in: straight to the dashboard.
    {
        let logged_in = state.logged_in;
        let navigate = use_navigate();
        create_effect(move |_| {
            if logged_in.get() {
                navigate("/", Default::default());
            }
        });
    }

    let selected_type = create_rw_signal(state.auth.last_login_type());
    let username = create_rw_signal(state.auth.remembered_username().unwrap_or_default());
    let password = create_rw_signal(String::new());
    let show_password = create_rw_signal(false);
    let remember = create_rw_signal(
        state
            .auth
            .remember_choice()
            .unwrap_or_else(|| state.auth.has_remember_token()),
    );
    let failed = create_rw_signal(false);

    let switch_type = {
        let auth = state.auth.clone();
        move |_| {
            let next = match selected_type.get_untracked() {
                UserType::Patient => UserType::Therapist,
                UserType::Therapist => UserType::Patient,
            };
            selected_type.set(next);
            auth.set_last_login_type(next);
        }
    };

    let on_remember = {
        let auth = state.auth.clone();
        move |ev: ev::Event| {
            let checked = event_target_checked(&ev);
            remember.set(checked);
            auth.set_remember_choice(checked);
        }
    };

    let submit_state = state.clone();
    let navigate = use_navigate();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let user = username.get_untracked();
        let pass = password.get_untracked();
        let ok = submit_state.auth.login(
            user.trim(),
            pass.trim(),
            selected_type.get_untracked(),
            remember.get_untracked(),
        );

        if ok {
            failed.set(false);
            submit_state.sync_auth();
            submit_state.navigate_module("dashboard");
            // Navigate after the signal updates have been applied.
            let navigate = navigate.clone();
            request_animation_frame(move || navigate("/", Default::default()));
        } else {
            failed.set(true);
        }
    };

    let t = {
        let locale = state.locale.clone();
        move |key: &'static str| {
            let locale = locale.clone();
            move || locale.t(key)
        }
    };

    let title = {
        let locale = state.locale.clone();
        move || match selected_type.get() {
            UserType::Patient => locale.t("login.titlePatient"),
            UserType::Therapist => locale.t("login.titleTherapist"),
        }
    };
    let switch_label = {
        let locale = state.locale.clone();
        move || match selected_type.get() {
            UserType::Patient => locale.t("login.switchToTherapist"),
            UserType::Therapist => locale.t("login.switchToPatient"),
        }
    };

    let visibility_icon = Signal::derive(move || {
        if show_password.get() {
            "password-visible".to_string()
        } else {
            "password-hidden".to_string()
        }
    });

    view! {
        <div class="shell shell-login">
            <Titlebar/>

            <main class="login">
                <form class="login-card" on:submit=on_submit>
                    <h1 class="login-title">{title}</h1>

                    <label class="login-field">
                        <span>{t("login.username")}</span>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="login-field login-field-password">
                        <span>{t("login.password")}</span>
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="login-password-toggle"
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            <Icon name=visibility_icon/>
                        </button>
                    </label>

                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=on_remember
                        />
                        <span>{t("login.rememberMe")}</span>
                    </label>

                    <p class="login-error" class:show=move || failed.get()>
                        {t("login.errorInvalidCredentials")}
                    </p>

                    <button type="submit" class="login-submit">
                        {t("login.submit")}
                    </button>

                    <a class="login-switch" on:click=switch_type>
                        {switch_label}
                    </a>
                </form>
            </main>

            <Statusbar/>
        </div>
    }
}
