use egui::{Color32, Id, RichText, TextEdit};

use crate::{
    state::{PickerAction, PickerState},
    types::{Axis, PointId},
};

const INPUT_WIDTH: f32 = 110.0;

/// The form above the map: a latitude and longitude input per point, a
/// randomize button per point, the line toggle and the error banner.
///
/// The widget never changes the picker state itself. It reports what the
/// user did as a list of [`PickerAction`]s for the caller to apply.
pub struct WidgetCoordinateForm {
    /// Text being edited, indexed by point then axis.
    drafts: [[String; 2]; 2],
    step: f64,
}

impl WidgetCoordinateForm {
    pub fn new(step: f64) -> Self {
        Self {
            drafts: Default::default(),
            step,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &PickerState) -> Vec<PickerAction> {
        let mut actions = vec![];

        for point in PointId::ALL {
            ui.add_space(6.0);
            ui.label(RichText::new(point.label()).size(18.0).strong());
            ui.horizontal(|ui| {
                for axis in Axis::ALL {
                    let draft = &mut self.drafts[point.index()][axis.index()];
                    coordinate_input(ui, state, point, axis, draft, self.step, &mut actions);
                    ui.add_space(10.0);
                }

                if ui.button("Randomize").clicked() {
                    actions.push(PickerAction::Randomize(point));
                }
            });
        }

        ui.add_space(10.0);
        if ui.button(toggle_label(state.line_visible())).clicked() {
            actions.push(PickerAction::ToggleLine);
        }

        if let Some(error) = state.error() {
            ui.colored_label(Color32::RED, error);
        }
        ui.add_space(6.0);

        actions
    }
}

fn toggle_label(line_visible: bool) -> &'static str {
    if line_visible {
        "Hide Line"
    } else {
        "Show Line"
    }
}

fn input_id(point: PointId, axis: Axis) -> Id {
    Id::new(("coordinate_input", point, axis))
}

/// One labelled input with its `-`/`+` buttons.
///
/// While the input has focus the draft keeps whatever the user typed, even if
/// it was rejected; once focus leaves, it shows the stored coordinate again.
fn coordinate_input(
    ui: &mut egui::Ui,
    state: &PickerState,
    point: PointId,
    axis: Axis,
    draft: &mut String,
    step: f64,
    actions: &mut Vec<PickerAction>,
) {
    let id = input_id(point, axis);
    if !ui.memory(|memory| memory.has_focus(id)) {
        *draft = state.point(point).get(axis).to_string();
    }

    ui.label(format!("{}:", axis.label()));
    let response = ui.add(TextEdit::singleline(draft).id(id).desired_width(INPUT_WIDTH));
    if response.changed() {
        actions.push(PickerAction::SetAxis {
            point,
            axis,
            text: draft.clone(),
        });
    }

    if ui.small_button("-").clicked() {
        actions.push(PickerAction::Step {
            point,
            axis,
            delta: -step,
        });
    }
    if ui.small_button("+").clicked() {
        actions.push(PickerAction::Step {
            point,
            axis,
            delta: step,
        });
    }
}
