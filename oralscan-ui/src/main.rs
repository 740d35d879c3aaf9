//! OralScan Web
//!
//! Oral cancer screening site built with Leptos (WASM).
//!
//! # Pages
//!
//! - Home, About and Creators: static content
//! - Upload: image upload, classification and PDF report download
//!
//! The AskOral chat widget floats over Home and Upload.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It only talks to the OralScan gateway under `/api`; the
//! gateway forwards to the predictor and chatbot.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
