#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

use iced::daemon;

use crate::core::models::PickerSettings;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting GIF picker");

    let settings = PickerSettings::load().unwrap_or_else(|e| {
        log::warn!("[MAIN] Failed to load settings: {}, using defaults", e);
        PickerSettings::default()
    });

    let api_key =
        match settings.resolve_api_key(std::env::var(global_constants::GIPHY_API_KEY_ENV).ok()) {
            Ok(key) => key,
            Err(e) => {
                log::error!("[MAIN] {}", e);
                eprintln!(
                    "{}: set {} or add \"api_key\" to the settings file",
                    e,
                    global_constants::GIPHY_API_KEY_ENV
                );
                std::process::exit(1);
            }
        };

    daemon(
        move || app::GifPickerApp::build(settings.clone(), api_key.clone()),
        app::GifPickerApp::handle_update,
        app::GifPickerApp::render_view,
    )
    .subscription(app::GifPickerApp::handle_subscription)
    .title(app::GifPickerApp::window_title)
    .run()
}
