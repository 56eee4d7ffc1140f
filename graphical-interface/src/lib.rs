use chrono::Utc;
use logger::Logger;
use walkers::MapMemory;

mod camera;
pub mod config;
pub mod errors;
pub mod generator;
mod map;
mod plugins;
pub mod scene;
pub mod state;
pub mod tiles;
pub mod types;
pub mod validation;
mod widgets;
mod windows;

pub use config::PickerConfig;
pub use errors::{PickerError, ValidationError};
use map::PickerApp;

/// Opens the picker window with the default configuration and blocks until
/// it is closed.
pub fn run() -> Result<(), PickerError> {
    run_with(PickerConfig::default())
}

pub fn run_with(config: PickerConfig) -> Result<(), PickerError> {
    config.validate()?;

    let session = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let logger = Logger::new(&config.log_dir, &session)?;

    let mut map_memory = MapMemory::default();
    map_memory
        .set_zoom(config.zoom)
        .map_err(|_| PickerError::InvalidZoom(config.zoom))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 760.0]),
        ..Default::default()
    };
    let title = config.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(PickerApp::new(
                cc.egui_ctx.clone(),
                config,
                logger,
                map_memory,
            )))
        }),
    )
    .map_err(|e| PickerError::Gui(e.to_string()))
}
