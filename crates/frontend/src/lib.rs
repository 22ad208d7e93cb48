//! Browser admin dashboard for the e-commerce backend.

pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Release builds only log from `Info` upwards.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Installs the console logger and panic hook, then mounts [`app::App`].
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    log::info!("mounting dashboard, API base {}", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}
