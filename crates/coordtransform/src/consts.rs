//! Numeric constants shared by the conversion and distance formulas.
//!
//! These are reverse-engineered values. Changing any of them shifts results
//! by meters to kilometers without any other visible symptom.

/// π at double precision.
pub const PI: f64 = std::f64::consts::PI;

/// Angular scale used by the BD09 polar correction.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// Semi-major axis of the Krasovsky 1940 ellipsoid, in meters.
pub const A: f64 = 6378245.0;

/// First eccentricity squared of the Krasovsky 1940 ellipsoid.
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.00669342162296594323;

/// Equatorial radius used by [`distance`](fn@crate::distance), in meters.
pub const EARTH_RADIUS: f64 = 6378137.0;
