//! VideoDigest browser entry point.
//!
//! Compiled to WebAssembly; mounts the [`app::App`] component into the page
//! body once the module loads.

use app::App;
use wasm_bindgen::prelude::*;

#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;

/// Initialize logging and mount the application.
///
/// Sets up the panic hook for better error messages in the console.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("mounting VideoDigest {}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(App);
}
