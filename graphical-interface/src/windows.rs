use egui::{Align2, RichText, Ui, Window};
use walkers::MapMemory;

use crate::config::TileProviderConfig;

/// Simple GUI to zoom in and out. Returns `true` when a button was pressed
/// past the zoom limits.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) -> bool {
    let mut refused = false;

    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    refused |= map_memory.zoom_in().is_err();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    refused |= map_memory.zoom_out().is_err();
                }
            });
        });

    refused
}

/// Credits the tile provider in the bottom-right corner of the map.
pub fn attribution(ui: &Ui, tiles: &TileProviderConfig) {
    Window::new("Attribution")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
        .show(ui.ctx(), |ui| {
            ui.hyperlink_to(RichText::new(tiles.attribution).small(), tiles.attribution_url);
        });
}
