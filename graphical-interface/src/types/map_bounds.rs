use crate::errors::PickerError;

use super::{Axis, GeoPoint};

/// The rectangular region every point must stay inside, defined by minimum
/// and maximum latitude and longitude (inclusive).
///
/// Both ranges are non-empty: the fields are only reachable through
/// [`BoundingBox::new`], which validates them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl BoundingBox {
    /// Compile-time presets. Ranges must already be ordered.
    pub(crate) const fn preset(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Builds a bounding box, rejecting empty or inverted ranges.
    pub fn new(
        min_lat: f64,
        max_lat: f64,
        min_lng: f64,
        max_lng: f64,
    ) -> Result<Self, PickerError> {
        let bounds = Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    fn validate(&self) -> Result<(), PickerError> {
        if !(self.min_lat < self.max_lat) {
            return Err(PickerError::InvalidBounds(format!(
                "latitude range [{}, {}] is empty",
                self.min_lat, self.max_lat
            )));
        }
        if !(self.min_lng < self.max_lng) {
            return Err(PickerError::InvalidBounds(format!(
                "longitude range [{}, {}] is empty",
                self.min_lng, self.max_lng
            )));
        }
        Ok(())
    }

    /// The inclusive `(min, max)` range for `axis`.
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Latitude => (self.min_lat, self.max_lat),
            Axis::Longitude => (self.min_lng, self.max_lng),
        }
    }

    pub fn contains_value(&self, axis: Axis, value: f64) -> bool {
        let (min, max) = self.range(axis);
        value >= min && value <= max
    }

    /// Checks whether a given point is within the bounds.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.contains_value(Axis::Latitude, point.lat)
            && self.contains_value(Axis::Longitude, point.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NIZHNY_NOVGOROD;

    fn bounds() -> BoundingBox {
        BoundingBox::new(56.20, 56.40, 43.90, 44.10).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_ranges() {
        assert!(matches!(
            BoundingBox::new(56.40, 56.20, 43.90, 44.10),
            Err(PickerError::InvalidBounds(_))
        ));
        assert!(matches!(
            BoundingBox::new(56.20, 56.40, 44.10, 44.10),
            Err(PickerError::InvalidBounds(_))
        ));
        assert!(BoundingBox::new(f64::NAN, 56.40, 43.90, 44.10).is_err());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(NIZHNY_NOVGOROD.validate().is_ok());
        assert_eq!(
            BoundingBox::new(56.20, 56.40, 43.90, 44.10).unwrap(),
            NIZHNY_NOVGOROD
        );
    }

    #[test]
    fn test_range_per_axis() {
        assert_eq!(bounds().range(Axis::Latitude), (56.20, 56.40));
        assert_eq!(bounds().range(Axis::Longitude), (43.90, 44.10));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = bounds();
        assert!(bounds.contains(&GeoPoint::new(56.20, 43.90)));
        assert!(bounds.contains(&GeoPoint::new(56.40, 44.10)));
        assert!(bounds.contains(&GeoPoint::new(56.30, 44.00)));
        assert!(!bounds.contains(&GeoPoint::new(56.50, 44.00)));
        assert!(!bounds.contains(&GeoPoint::new(56.30, 43.89)));
    }
}
