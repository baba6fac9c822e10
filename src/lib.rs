// Site Audio - background music widget
// Module declarations
pub mod audio;
pub mod commands;
pub mod controller;
pub mod error;
pub mod logging;
pub mod settings;
pub mod state;
pub mod storage;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod web;

pub use controller::PlaybackController;
pub use settings::WidgetSettings;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();

    let (settings, config_error) = match WidgetSettings::load(web::inline_config().as_deref()) {
        Ok(settings) => (settings, None),
        Err(e) => (WidgetSettings::default(), Some(e)),
    };

    logging::init(settings.max_level());
    if let Some(e) = config_error {
        tracing::warn!("[Settings] {}, using defaults", e);
    }

    match web::mount(settings) {
        Ok(true) => tracing::info!("[Page] Site audio v{} ready", env!("CARGO_PKG_VERSION")),
        Ok(false) => {}
        Err(e) => tracing::error!("[Page] Could not start site audio: {:#}", e),
    }
}
