use crate::{
    config::{LineStyle, MarkerIcon, PickerConfig},
    state::PickerState,
    types::{GeoPoint, PointId},
};

/// A labelled marker at one of the two points.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: PointId,
    pub position: GeoPoint,
    pub label: &'static str,
    pub icon: MarkerIcon,
}

/// The segment joining the two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub style: LineStyle,
}

/// Everything the map needs to draw one frame, read from the picker state.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub center: GeoPoint,
    pub markers: [MarkerSpec; 2],
    pub line: Option<LineSpec>,
}

impl MapScene {
    pub fn build(state: &PickerState, config: &PickerConfig) -> Self {
        let marker = |id: PointId| MarkerSpec {
            id,
            position: state.point(id),
            label: id.label(),
            icon: config.marker,
        };

        let line = state.line_visible().then(|| LineSpec {
            from: state.point(PointId::First),
            to: state.point(PointId::Second),
            style: config.line,
        });

        Self {
            center: state.point(PointId::First),
            markers: [marker(PointId::First), marker(PointId::Second)],
            line,
        }
    }
}
