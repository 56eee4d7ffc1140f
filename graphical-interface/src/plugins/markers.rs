use std::{cell::RefCell, rc::Rc};

use egui::{vec2, Align2, Color32, FontId, Pos2, Response, Sense, Shape, Stroke};
use walkers::{Plugin, Projector};

use crate::{scene::MarkerSpec, state::PopupState};

const LABEL_FONT_SIZE: f32 = 14.0;
const LABEL_PADDING: f32 = 6.0;

pub struct Markers<'a> {
    markers: &'a [MarkerSpec],
    popup_state: Rc<RefCell<PopupState>>,
}

impl<'a> Markers<'a> {
    pub fn new(markers: &'a [MarkerSpec], popup_state: Rc<RefCell<PopupState>>) -> Self {
        Self {
            markers,
            popup_state,
        }
    }
}

impl Plugin for Markers<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for marker in self.markers {
            marker.draw(ui, projector, &mut self.popup_state.borrow_mut());
        }
    }
}

impl MarkerSpec {
    fn draw(&self, ui: &mut egui::Ui, projector: &Projector, popup_state: &mut PopupState) {
        let tip = projector.project(self.position.to_position()).to_pos2();
        let rect = self.icon.rect_at(tip);

        let response = ui.allocate_rect(rect, Sense::click());
        if response.clicked() {
            popup_state.toggle(self.id);
        }

        let fill = if response.hovered() {
            self.icon.outline
        } else {
            self.icon.fill
        };
        let outline = Stroke::new(1.0, self.icon.outline);

        // Pin: a round head over a triangle whose apex is the anchor.
        let radius = rect.width() / 2.0;
        let head = Pos2::new(rect.center().x, rect.top() + radius);
        let painter = ui.painter();
        painter.add(Shape::convex_polygon(
            vec![
                head + vec2(-radius * 0.8, radius * 0.5),
                head + vec2(radius * 0.8, radius * 0.5),
                tip,
            ],
            fill,
            outline,
        ));
        painter.circle(head, radius, fill, outline);
        painter.circle_filled(head, radius * 0.4, Color32::WHITE);

        if popup_state.open == Some(self.id) {
            draw_label(painter, rect.center_top() - vec2(0.0, 4.0), self.label);
        }

        response.on_hover_text(self.label);
    }
}

/// Draws a small white bubble with `text`, its bottom edge centred on `anchor`.
fn draw_label(painter: &egui::Painter, anchor: Pos2, text: &str) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        FontId::proportional(LABEL_FONT_SIZE),
        Color32::BLACK,
    );
    let bubble = Align2::CENTER_BOTTOM.anchor_size(
        anchor,
        galley.size() + vec2(LABEL_PADDING * 2.0, LABEL_PADDING),
    );

    painter.rect(
        bubble,
        4.0,
        Color32::WHITE,
        Stroke::new(1.0, Color32::from_gray(160)),
    );
    painter.galley(
        bubble.min + vec2(LABEL_PADDING, LABEL_PADDING / 2.0),
        galley,
        Color32::BLACK,
    );
}
