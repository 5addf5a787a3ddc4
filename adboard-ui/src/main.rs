//! Adboard Dashboard
//!
//! Search terms performance dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Light/dark theme remembered in local storage
//! - Dual-axis interactions / average cost chart drawn on a canvas
//! - Sortable results table with a fixed totals row
//! - Row selection with a contextual action bar
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All page logic lives in the `adboard` crate; this crate only
//! supplies the browser pieces (storage, timers, canvas) and the markup.

use leptos::*;

mod app;
mod components;
mod platform;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
