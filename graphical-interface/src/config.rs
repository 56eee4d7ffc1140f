use std::path::PathBuf;

use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use crate::{errors::PickerError, types::BoundingBox};

/// Approximate extent of Nizhny Novgorod.
pub const NIZHNY_NOVGOROD: BoundingBox = BoundingBox::preset(56.20, 56.40, 43.90, 44.10);

const INITIAL_ZOOM: f64 = 13.0;
const COORDINATE_STEP: f64 = 0.000001;

/// Where map tiles come from and how they are credited.
#[derive(Debug, Clone, PartialEq)]
pub struct TileProviderConfig {
    /// URL with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    pub url_template: &'static str,
    pub subdomains: &'static [&'static str],
    pub attribution: &'static str,
    pub attribution_url: &'static str,
    /// Highest zoom the provider serves; the initial zoom must not exceed it.
    pub max_zoom: u8,
}

impl Default for TileProviderConfig {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            subdomains: &["a", "b", "c"],
            attribution: "© OpenStreetMap contributors",
            attribution_url: "https://www.openstreetmap.org/copyright",
            max_zoom: 19,
        }
    }
}

/// How the connecting line between the two points is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color32,
    pub width: f32,
    pub opacity: f32,
}

impl LineStyle {
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.width, self.color.gamma_multiply(self.opacity))
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color32::BLUE,
            width: 3.0,
            opacity: 0.7,
        }
    }
}

/// Icon drawn for a single marker.
///
/// Every marker receives its own copy; `anchor` is the offset from the
/// icon's top-left corner to the pixel that sits on the geographic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIcon {
    pub size: Vec2,
    pub anchor: Vec2,
    pub fill: Color32,
    pub outline: Color32,
}

impl MarkerIcon {
    /// Screen rectangle covered by the icon when its anchor is at `tip`.
    pub fn rect_at(&self, tip: Pos2) -> Rect {
        Rect::from_min_size(tip - self.anchor, self.size)
    }
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            size: Vec2::new(25.0, 41.0),
            anchor: Vec2::new(12.0, 41.0),
            fill: Color32::from_rgb(42, 129, 203),
            outline: Color32::from_rgb(24, 78, 124),
        }
    }
}

/// Settings for one picker session.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub title: String,
    pub bounds: BoundingBox,
    pub zoom: f64,
    /// Granularity of the `-`/`+` buttons next to each input.
    pub step: f64,
    pub tiles: TileProviderConfig,
    pub line: LineStyle,
    pub marker: MarkerIcon,
    pub log_dir: PathBuf,
}

impl PickerConfig {
    pub fn validate(&self) -> Result<(), PickerError> {
        if !(self.zoom >= 0.0 && self.zoom <= f64::from(self.tiles.max_zoom)) {
            return Err(PickerError::InvalidZoom(self.zoom));
        }
        Ok(())
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            title: "Coordinate Picker".to_string(),
            bounds: NIZHNY_NOVGOROD,
            zoom: INITIAL_ZOOM,
            step: COORDINATE_STEP,
            tiles: TileProviderConfig::default(),
            line: LineStyle::default(),
            marker: MarkerIcon::default(),
            log_dir: std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PickerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bounds, NIZHNY_NOVGOROD);
        assert_eq!(config.zoom, 13.0);
    }

    #[test]
    fn test_validate_rejects_zoom_beyond_tiles() {
        let config = PickerConfig {
            zoom: 25.0,
            ..PickerConfig::default()
        };
        assert!(matches!(config.validate(), Err(PickerError::InvalidZoom(_))));
    }

    #[test]
    fn test_marker_tip_sits_on_anchor() {
        let icon = MarkerIcon::default();
        let rect = icon.rect_at(Pos2::new(100.0, 200.0));

        assert_eq!(rect.min, Pos2::new(88.0, 159.0));
        assert_eq!(rect.size(), Vec2::new(25.0, 41.0));
        assert_eq!(rect.max.y, 200.0);
    }

    #[test]
    fn test_line_stroke_is_translucent() {
        let stroke = LineStyle::default().stroke();
        assert_eq!(stroke.width, 3.0);
        assert!(stroke.color.a() > 0 && stroke.color.a() < 255);
    }
}
