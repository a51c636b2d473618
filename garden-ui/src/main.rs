//! Garden browser UI
//!
//! Client-side rendered notes viewer built with Leptos (WASM).
//!
//! # Features
//!
//! - Note index and note detail routes
//! - Sidebar pinned open on wide viewports, collapsible on narrow ones
//! - Live re-layout on window resize
//!
//! # Architecture
//!
//! A CSR Leptos application compiled to WebAssembly. Notes come from the
//! Garden server's JSON API (`/api/v1/notes`).

use leptos::*;

mod api;
mod app;
mod components;
mod hooks;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
