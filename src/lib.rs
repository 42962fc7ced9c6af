/// Portfolio site - single-page personal portfolio
/// Built with Rust + WASM + Yew

pub mod article_data;
pub mod article_ops;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod navigation;
pub mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the content helpers for JavaScript access
#[wasm_bindgen]
pub fn sanitize_html(html: &str) -> String {
    article_ops::sanitize(html)
}

#[wasm_bindgen]
pub fn excerpt(body_html: &str) -> String {
    article_ops::derive_excerpt(body_html, config::FeedConfig::default().excerpt_words)
}

// Mount the site into <body>
#[wasm_bindgen]
pub fn start_app() {
    log::info!("Starting portfolio site");
    yew::Renderer::<ui::App>::new().render();
}
