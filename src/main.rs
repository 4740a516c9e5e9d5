//! Vitaport Portal Shell
//!
//! Client-side portal for patients and therapists, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Login with user-type switching and remember-me
//! - Persisted theme, language and navigation preferences
//! - Responsive navigation with sidenav and overflowing bottom bar
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state persists in `localStorage`; the only network
//! traffic is for static JSON resources served alongside the app.

use leptos::*;

mod api;
mod app;
mod components;
mod icons;
mod layout;
mod modules;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
