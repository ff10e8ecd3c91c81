// src/main.rs
use iced::{window, Application, Settings};

mod app;
mod config;
mod connection;
mod data_types;
mod form;
mod intake;
mod labels;
mod samples;
mod session;
mod ui;
mod views;

use app::DataUpload;
use config::AppConfig;

pub fn main() -> iced::Result {
    env_logger::init();

    let config = AppConfig::load_or_default();
    log::info!(
        "Starting data upload v{} (locale {:?}, upload delay {:?}, connect delay {:?})",
        env!("CARGO_PKG_VERSION"),
        config.locale,
        config.upload_delay(),
        config.connect_delay()
    );

    DataUpload::run(Settings {
        window: window::Settings {
            size: (config.window_width, config.window_height),
            resizable: true,
            ..Default::default()
        },
        ..Settings::with_flags(config)
    })
}
