use std::fmt::{self, Display};

use logger::LoggerError;

use crate::types::Axis;

/// Reasons a typed coordinate is rejected.
///
/// The `Display` output is the message shown in the error banner below the
/// coordinate form.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The text does not parse as a finite number.
    NotANumber,
    /// The number lies outside the permitted range for its axis.
    OutOfRange { axis: Axis, min: f64, max: f64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotANumber => write!(f, "Please enter a valid number."),
            ValidationError::OutOfRange { axis, min, max } => {
                write!(f, "{} must be between {} and {}", axis.label(), min, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can stop the picker from starting.
///
/// None of these are produced by user input; they come from the startup
/// configuration, the session log, or the windowing backend.
#[derive(Debug)]
pub enum PickerError {
    InvalidBounds(String),
    InvalidZoom(f64),
    Logger(LoggerError),
    Gui(String),
}

impl Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::InvalidBounds(msg) => write!(f, "[InvalidBounds]: {}", msg),
            PickerError::InvalidZoom(zoom) => {
                write!(f, "[InvalidZoom]: {} is not a valid zoom level", zoom)
            }
            PickerError::Logger(e) => write!(f, "[Logger]: {}", e),
            PickerError::Gui(msg) => write!(f, "[Gui]: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PickerError::Logger(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoggerError> for PickerError {
    fn from(err: LoggerError) -> Self {
        PickerError::Logger(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_number_message() {
        assert_eq!(
            ValidationError::NotANumber.to_string(),
            "Please enter a valid number."
        );
    }

    #[test]
    fn test_out_of_range_message_names_the_range() {
        let err = ValidationError::OutOfRange {
            axis: Axis::Latitude,
            min: 56.20,
            max: 56.40,
        };
        assert_eq!(err.to_string(), "Latitude must be between 56.2 and 56.4");

        let err = ValidationError::OutOfRange {
            axis: Axis::Longitude,
            min: 43.90,
            max: 44.10,
        };
        assert_eq!(err.to_string(), "Longitude must be between 43.9 and 44.1");
    }

    #[test]
    fn test_picker_error_wraps_logger_error() {
        let err: PickerError = LoggerError::InvalidPath("not a directory".into()).into();
        assert!(matches!(err, PickerError::Logger(_)));
        assert!(err.to_string().starts_with("[Logger]"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
