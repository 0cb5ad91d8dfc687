//! PlotChat UI
//!
//! Single-page chat view built with Leptos (WASM).
//!
//! # Features
//!
//! - Linear conversation transcript
//! - Text replies and inline plot documents
//! - Full-screen toggle for plots
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the PlotChat relay over HTTP; the transcript
//! lives only in the page and is gone on reload.

use leptos::*;

mod api;
mod app;
mod components;
mod document;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
