/// Bias Check - left/right perspective summaries for any topic or article
/// Built with Rust + WASM + Yew

mod analysis;
mod article;
mod bias;
mod config;
mod error;
mod firebase;
mod gemini;
mod history;
mod i18n;
mod input;
mod perspectives;
mod prompt;
mod state;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export URL detection for JavaScript access
#[wasm_bindgen]
pub fn detect_url(input: &str) -> bool {
    input::is_url(input.trim())
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
