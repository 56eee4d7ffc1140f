use walkers::Position;

use super::Axis;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Latitude => self.lat,
            Axis::Longitude => self.lng,
        }
    }

    /// Returns a copy with only `axis` replaced.
    pub fn with_axis(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Latitude => Self { lat: value, ..self },
            Axis::Longitude => Self { lng: value, ..self },
        }
    }

    pub fn to_position(self) -> Position {
        Position::from_lat_lon(self.lat, self.lng)
    }
}
