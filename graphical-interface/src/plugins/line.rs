use egui::Response;
use walkers::{Plugin, Projector};

use crate::scene::LineSpec;

/// Draws the segment between the two points when the scene has one.
pub struct Line<'a> {
    line: Option<&'a LineSpec>,
}

impl<'a> Line<'a> {
    pub fn new(line: Option<&'a LineSpec>) -> Self {
        Self { line }
    }
}

impl Plugin for Line<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let Some(line) = self.line else {
            return;
        };

        let from = projector.project(line.from.to_position()).to_pos2();
        let to = projector.project(line.to.to_position()).to_pos2();
        ui.painter().line_segment([from, to], line.style.stroke());
    }
}
