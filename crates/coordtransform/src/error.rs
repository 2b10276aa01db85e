//! Error types for the coordtransform crate.
//!
//! Only text parsing can fail. Every numeric conversion is total.

use thiserror::Error;

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while parsing coordinate input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Coordinate text is not a `lng,lat` pair of numbers
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Coordinate system name is not recognized
    #[error("Unknown coordinate system: {0} (expected wgs84, gcj02 or bd09)")]
    UnknownSystem(String),
}

/// Error code for callers that report numeric codes.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid coordinate text
    InvalidCoordinate = 10002,
    /// Unknown coordinate system name
    UnknownSystem = 10004,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::UnknownSystem(_) => GeoErrorCode::UnknownSystem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GeoError::InvalidCoordinate("x".into()).code() as u32, 10002);
        assert_eq!(GeoError::UnknownSystem("x".into()).code() as u32, 10004);
    }

    #[test]
    fn test_error_display() {
        let err = GeoError::UnknownSystem("utm".into());
        assert_eq!(
            err.to_string(),
            "Unknown coordinate system: utm (expected wgs84, gcj02 or bd09)"
        );
    }
}
