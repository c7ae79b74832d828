pub mod animation;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod theme;
pub mod toast;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(App);
}
