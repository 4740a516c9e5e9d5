//! Imprint Popup
//!
//! Legal notice overlay reachable from the login avatar menu. Content is
//! fetched lazily on first open; a fetch failure falls back to built-in
//! placeholder data so the popup never opens empty.

use leptos::*;
use web_sys::console;

use crate::api::{fetch_imprint, ImprintData};
use crate::components::Icon;
use crate::state::use_app_state;

#[component]
pub fn ImprintPopup() -> impl IntoView {
    let state = use_app_state();
    let open = state.imprint_open;
    let data = create_rw_signal(None::<ImprintData>);

    // Fetch once, the first time the popup opens.
    create_effect(move |_| {
        if open.get() && data.get_untracked().is_none() {
            spawn_local(async move {
                let imprint = match fetch_imprint().await {
                    Ok(imprint) => imprint,
                    Err(e) => {
                        console::warn_1(&format!("Imprint unavailable: {}", e).into());
                        ImprintData::fallback()
                    }
                };
                data.set(Some(imprint));
            });
        }
    });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    let locale = state.locale.clone();
    let title = move || {
        data.get()
            .map(|imprint| imprint.title)
            .unwrap_or_else(|| locale.t("imprint.title"))
    };

    let body = move || {
        data.get().map(|imprint| {
            view! {
                <p class="imprint-subtitle">{imprint.subtitle.clone()}</p>
                <div class="imprint-section">
                    <h3>{imprint.company.name.clone()}</h3>
                    <p>{imprint.company.address.street.clone()}</p>
                    <p>
                        {format!(
                            "{} {}, {}",
                            imprint.company.address.zip_code,
                            imprint.company.address.city,
                            imprint.company.address.country
                        )}
                    </p>
                    <p>{imprint.company.management.clone()}</p>
                </div>
                <div class="imprint-section">
                    <p>
                        {format!(
                            "{}, {}",
                            imprint.company.registration.court,
                            imprint.company.registration.number
                        )}
                    </p>
                    <p>{imprint.company.vat_id.clone()}</p>
                </div>
                <div class="imprint-section">
                    <p>{imprint.company.contact.phone.clone()}</p>
                    <p>{imprint.company.contact.fax.clone()}</p>
                    <p>{imprint.company.contact.email.clone()}</p>
                </div>
                <div class="imprint-section imprint-disclaimer">
                    <h4>{imprint.disclaimer.title.clone()}</h4>
                    <p>{imprint.disclaimer.text.clone()}</p>
                </div>
            }
        })
    };

    view! {
        <div
            class="imprint-overlay"
            class:show=move || open.get()
            on:click=move |_| open.set(false)
        >
            <div class="imprint-popup" on:click=move |ev| ev.stop_propagation()>
                <div class="imprint-header">
                    <h2>{title}</h2>
                    <button class="imprint-close" on:click=move |_| open.set(false)>
                        <Icon name="close"/>
                    </button>
                </div>
                <div class="imprint-body">{body}</div>
            </div>
        </div>
    }
}
