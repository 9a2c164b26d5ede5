//! Clinic Records UI
//!
//! Browser frontend for a small clinic-records service, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Client roster with registration and deletion
//! - Per-client detail panel with diagnostic test history
//! - Test results rendered into popup windows
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the clinic records REST API via HTTP;
//! the currently selected client persists in browser local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod dom;
mod pages;
mod result_popup;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
