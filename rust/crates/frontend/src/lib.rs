//! Portfolio Site - Yew WASM Frontend
//!
//! Single-page portfolio: hero, projects, about, skills, certification and
//! contact sections rendered from the content in `portfolio_types`.

mod app;
mod components;
mod hooks;
mod sections;

pub use app::App;

use wasm_bindgen::prelude::*;

/// Build-time log level override, e.g. `PORTFOLIO_LOG=debug trunk build`.
const LOG_LEVEL_ENV: Option<&str> = option_env!("PORTFOLIO_LOG");

/// Resolve the console log level, falling back to `Info` for unset or
/// unrecognized values.
fn log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    if let Err(e) = console_log::init_with_level(log_level(LOG_LEVEL_ENV)) {
        web_sys::console::warn_1(&format!("Console logging unavailable: {}", e).into());
    }
    yew::Renderer::<App>::new().render();
}
