use crate::{
    errors::ValidationError,
    types::{Axis, BoundingBox},
};

/// Parses `text` as a coordinate on `axis` and checks it against `bounds`.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are treated as
/// non-numeric.
pub fn parse_coordinate(
    text: &str,
    axis: Axis,
    bounds: &BoundingBox,
) -> Result<f64, ValidationError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;

    if !value.is_finite() {
        return Err(ValidationError::NotANumber);
    }

    if !bounds.contains_value(axis, value) {
        let (min, max) = bounds.range(axis);
        return Err(ValidationError::OutOfRange { axis, min, max });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NIZHNY_NOVGOROD;

    #[test]
    fn test_valid_latitude() {
        assert_eq!(
            parse_coordinate("56.25", Axis::Latitude, &NIZHNY_NOVGOROD),
            Ok(56.25)
        );
        assert_eq!(
            parse_coordinate(" 44.05 ", Axis::Longitude, &NIZHNY_NOVGOROD),
            Ok(44.05)
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(parse_coordinate("56.2", Axis::Latitude, &NIZHNY_NOVGOROD).is_ok());
        assert!(parse_coordinate("56.4", Axis::Latitude, &NIZHNY_NOVGOROD).is_ok());
        assert!(parse_coordinate("43.9", Axis::Longitude, &NIZHNY_NOVGOROD).is_ok());
        assert!(parse_coordinate("44.1", Axis::Longitude, &NIZHNY_NOVGOROD).is_ok());
    }

    #[test]
    fn test_non_numeric_input() {
        for text in ["abc", "", "   ", "56,25", "NaN", "inf", "-inf"] {
            assert_eq!(
                parse_coordinate(text, Axis::Latitude, &NIZHNY_NOVGOROD),
                Err(ValidationError::NotANumber),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_out_of_range_uses_axis_bounds() {
        let err = parse_coordinate("56.50", Axis::Latitude, &NIZHNY_NOVGOROD).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                axis: Axis::Latitude,
                min: 56.20,
                max: 56.40
            }
        );

        // A valid latitude is still out of range as a longitude.
        let err = parse_coordinate("56.30", Axis::Longitude, &NIZHNY_NOVGOROD).unwrap_err();
        assert!(err.to_string().contains("43.9"));
        assert!(err.to_string().contains("44.1"));
    }
}
