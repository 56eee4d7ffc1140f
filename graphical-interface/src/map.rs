use std::{cell::RefCell, rc::Rc};

use egui::Context;
use logger::{Color, Logger};
use rand::{rngs::StdRng, SeedableRng};
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Tiles};

use crate::{
    camera::Camera,
    config::PickerConfig,
    plugins,
    scene::MapScene,
    state::{PickerAction, PickerState, PopupState},
    tiles::TemplateTiles,
    types::{Axis, PointId},
    widgets::WidgetCoordinateForm,
    windows,
};

/// The picker window: the coordinate form on top and the map below.
///
/// `PickerApp` owns the picker state and is the only place where form actions
/// are applied to it. Each frame it rebuilds the [`MapScene`] from the state
/// and hands it to the map plugins.
pub struct PickerApp {
    tiles: Box<dyn Tiles>,
    camera: Camera,
    config: PickerConfig,
    state: PickerState,
    popup_state: Rc<RefCell<PopupState>>,
    form_widget: WidgetCoordinateForm,
    rng: StdRng,
    logger: Logger,
}

impl PickerApp {
    /// Creates a new `PickerApp` with two random points and the line hidden.
    ///
    /// `map_memory` should already carry the initial zoom.
    pub fn new(
        egui_ctx: Context,
        config: PickerConfig,
        logger: Logger,
        map_memory: MapMemory,
    ) -> Self {
        let mut rng = StdRng::from_entropy();
        let state = PickerState::new(config.bounds, &mut rng);
        let first = state.point(PointId::First);
        let second = state.point(PointId::Second);
        let lat_range = config.bounds.range(Axis::Latitude);
        let lng_range = config.bounds.range(Axis::Longitude);

        let _ = logger.info(
            &format!(
                "Session started: latitude [{}, {}], longitude [{}, {}]; Point 1 ({}, {}); Point 2 ({}, {})",
                lat_range.0,
                lat_range.1,
                lng_range.0,
                lng_range.1,
                first.lat,
                first.lng,
                second.lat,
                second.lng
            ),
            Color::Cyan,
            true,
        );
        let _ = logger.info(
            &format!("Session log: {}", logger.path().display()),
            Color::Cyan,
            true,
        );

        Self {
            tiles: Box::new(HttpTiles::with_options(
                TemplateTiles::new(config.tiles.clone()),
                HttpOptions::default(),
                egui_ctx,
            )),
            camera: Camera::new(map_memory, first),
            form_widget: WidgetCoordinateForm::new(config.step),
            popup_state: Rc::new(RefCell::new(PopupState::new())),
            config,
            state,
            rng,
            logger,
        }
    }

    /// Applies an action from the form. Rejected input only updates the error
    /// banner, so only accepted actions are logged.
    fn handle(&mut self, action: PickerAction) {
        if self.state.apply(&action, &mut self.rng).is_ok() {
            let _ = self
                .logger
                .info(&self.state.describe(&action), Color::Green, false);
        }
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = egui::TopBottomPanel::top("coordinate_form")
            .show(ctx, |ui| self.form_widget.show(ui, &self.state))
            .inner;
        for action in actions {
            self.handle(action);
        }

        let scene = MapScene::build(&self.state, &self.config);

        self.camera.recenter(scene.center);

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let tiles = self.tiles.as_mut();

                let line_plugin = plugins::Line::new(scene.line.as_ref());
                let markers_plugin =
                    plugins::Markers::new(&scene.markers, self.popup_state.clone());

                let map = Map::new(
                    Some(tiles),
                    &mut self.camera.map_memory,
                    scene.center.to_position(),
                )
                .with_plugin(line_plugin)
                .with_plugin(markers_plugin);

                ui.add(map);

                if windows::zoom(ui, &mut self.camera.map_memory) {
                    let _ = self.logger.warn("Zoom limit reached", false);
                }
                windows::attribution(ui, &self.config.tiles);
            });
    }
}
