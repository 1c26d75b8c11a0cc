// ---------------------------------------------------------------------------
// RideError: construction failures for ride variants
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised while constructing a ride variant.
///
/// Base fields (name, price, capacity) never produce an error; they are
/// clamped to their defaults instead. Variant-specific fields are checked
/// up front and the ride is never built when one of them is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideError {
    /// A constructor argument was rejected. Carries a fixed message such as
    /// `"invalid height"` or `"invalid speed"`.
    InvalidArgument(&'static str),
}

impl RideError {
    /// The fixed message carried by the error.
    pub fn message(&self) -> &'static str {
        match self {
            RideError::InvalidArgument(msg) => *msg,
        }
    }
}

impl fmt::Display for RideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for RideError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ride_error_display_invalid_argument() {
        let err = RideError::InvalidArgument("invalid height");
        let msg = format!("{err}");
        assert!(msg.contains("Invalid argument"), "got: {msg}");
        assert!(msg.contains("invalid height"), "got: {msg}");
    }

    #[test]
    fn test_ride_error_message() {
        let err = RideError::InvalidArgument("invalid speed");
        assert_eq!(err.message(), "invalid speed");
    }

    #[test]
    fn test_ride_error_is_error_trait() {
        let err = RideError::InvalidArgument("invalid time");
        let source = std::error::Error::source(&err);
        assert!(source.is_none());
    }

    #[test]
    fn test_ride_error_debug() {
        let err = RideError::InvalidArgument("invalid weight");
        let debug = format!("{err:?}");
        assert!(debug.contains("InvalidArgument"), "got: {debug}");
    }
}
