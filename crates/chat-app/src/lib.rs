//! Chat App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the HTTP backend and the DOM view and hands them to the chat client.

mod app;

use wasm_bindgen::prelude::*;

/// WASM entry point — runs when index.html loads the module
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat client starting...");

    match app::ChatApp::mount() {
        Ok(_) => log::info!("Chat client ready"),
        Err(e) => log::error!("Failed to start chat client: {}", e),
    }
}
