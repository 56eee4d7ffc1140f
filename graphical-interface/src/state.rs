use rand::Rng;

use crate::{
    errors::ValidationError,
    generator::random_point,
    types::{Axis, BoundingBox, GeoPoint, PointId},
    validation::parse_coordinate,
};

/// A user interaction that changes the picker state.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerAction {
    /// Text typed into one of the coordinate inputs.
    SetAxis {
        point: PointId,
        axis: Axis,
        text: String,
    },
    /// One of the `-`/`+` buttons next to an input.
    Step {
        point: PointId,
        axis: Axis,
        delta: f64,
    },
    Randomize(PointId),
    ToggleLine,
}

/// The two points, the line toggle and the error banner.
///
/// All mutation goes through the named operations below so that every edit
/// of a coordinate is validated against the bounding box.
#[derive(Debug, Clone)]
pub struct PickerState {
    bounds: BoundingBox,
    points: [GeoPoint; 2],
    line_visible: bool,
    error: Option<String>,
}

impl PickerState {
    /// Starts with two random points inside `bounds` and the line hidden.
    pub fn new<R: Rng + ?Sized>(bounds: BoundingBox, rng: &mut R) -> Self {
        let first = random_point(&bounds, rng);
        let second = random_point(&bounds, rng);
        Self::with_points(bounds, first, second)
    }

    pub fn with_points(bounds: BoundingBox, first: GeoPoint, second: GeoPoint) -> Self {
        Self {
            bounds,
            points: [first, second],
            line_visible: false,
            error: None,
        }
    }

    pub fn point(&self, id: PointId) -> GeoPoint {
        self.points[id.index()]
    }

    pub fn line_visible(&self) -> bool {
        self.line_visible
    }

    /// The message from the most recent rejected input, if it has not been
    /// cleared by a valid one since.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates `text` and, if it is acceptable, stores it as `axis` of
    /// `point`. The other axis and the other point are left untouched.
    ///
    /// Either way the error banner is updated: set on rejection, cleared on
    /// success.
    pub fn set_axis(
        &mut self,
        point: PointId,
        axis: Axis,
        text: &str,
    ) -> Result<f64, ValidationError> {
        match parse_coordinate(text, axis, &self.bounds) {
            Ok(value) => {
                self.error = None;
                let slot = &mut self.points[point.index()];
                *slot = slot.with_axis(axis, value);
                Ok(value)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Nudges `axis` of `point` by `delta`, going through the same validation
    /// as typed input.
    pub fn step_axis(
        &mut self,
        point: PointId,
        axis: Axis,
        delta: f64,
    ) -> Result<f64, ValidationError> {
        let candidate = self.point(point).get(axis) + delta;
        self.set_axis(point, axis, &format!("{:.6}", candidate))
    }

    /// Replaces `point` with a fresh random point inside the bounds.
    pub fn randomize<R: Rng + ?Sized>(&mut self, point: PointId, rng: &mut R) -> GeoPoint {
        let fresh = random_point(&self.bounds, rng);
        self.points[point.index()] = fresh;
        fresh
    }

    /// Flips line visibility and returns the new value.
    pub fn toggle_line(&mut self) -> bool {
        self.line_visible = !self.line_visible;
        self.line_visible
    }

    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: &PickerAction,
        rng: &mut R,
    ) -> Result<(), ValidationError> {
        match action {
            PickerAction::SetAxis { point, axis, text } => {
                self.set_axis(*point, *axis, text)?;
            }
            PickerAction::Step { point, axis, delta } => {
                self.step_axis(*point, *axis, *delta)?;
            }
            PickerAction::Randomize(point) => {
                self.randomize(*point, rng);
            }
            PickerAction::ToggleLine => {
                self.toggle_line();
            }
        }
        Ok(())
    }

    /// One-line summary of an applied action, for the session log.
    pub fn describe(&self, action: &PickerAction) -> String {
        match action {
            PickerAction::SetAxis { point, axis, .. } | PickerAction::Step { point, axis, .. } => {
                format!(
                    "{} {} set to {}",
                    point.label(),
                    axis.label().to_lowercase(),
                    self.point(*point).get(*axis)
                )
            }
            PickerAction::Randomize(point) => {
                let p = self.point(*point);
                format!("{} randomized to ({}, {})", point.label(), p.lat, p.lng)
            }
            PickerAction::ToggleLine => {
                if self.line_visible {
                    "Line shown".to_string()
                } else {
                    "Line hidden".to_string()
                }
            }
        }
    }
}

/// Tracks which marker, if any, has its label popup open.
#[derive(Debug, Default)]
pub struct PopupState {
    pub open: Option<PointId>,
}

impl PopupState {
    pub fn new() -> PopupState {
        Self { open: None }
    }

    /// If the provided marker's popup is already open, it will be closed.
    /// Otherwise it is opened, closing any other popup.
    pub fn toggle(&mut self, point: PointId) {
        if self.open == Some(point) {
            self.open = None;
        } else {
            self.open = Some(point);
        }
    }
}
