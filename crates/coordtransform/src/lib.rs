//! Coordinate conversion between WGS84, GCJ02 and BD09.
//!
//! This crate provides:
//! - WGS84 ↔ GCJ02 conversion with the mainland China bypass
//! - GCJ02 ↔ BD09 conversion and the composed WGS84 ↔ BD09 pair
//! - Cosine-rule great-circle distance in meters
//! - WASM bindings for browser usage
//!
//! Every function is pure and total: out-of-range input is not rejected and
//! simply flows through the formulas.
//!
//! # Example
//!
//! ```
//! use coordtransform::{distance, wgs84_to_bd09};
//!
//! let bd = wgs84_to_bd09(104.03604907542808, 30.623654551828945);
//! assert!((bd.longitude - 104.0449054907395).abs() < 1e-9);
//!
//! let meters = distance(104.070497, 30.588777, 104.070785, 30.581813);
//! assert!((meters - 775.72).abs() < 0.01);
//! ```

pub mod consts;
mod offset;
mod gcj02;
mod bd09;
mod distance;
mod system;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use offset::{out_of_china, transform_lat, transform_lng, Bounds, CHINA_BOUNDS};
pub use gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
pub use bd09::{bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, wgs84_to_bd09};
pub use distance::{distance, distance_between, rad};
pub use system::{convert, CoordinateSystem};
pub use error::{GeoError, GeoErrorCode, Result};

use std::fmt;
use std::str::FromStr;

/// A longitude/latitude pair in decimal degrees.
///
/// Longitude always comes first, in fields, constructors and tuples.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `longitude` - Longitude in degrees
    /// * `latitude` - Latitude in degrees
    #[inline]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Returns true if the point lies outside the GCJ02 bounding box.
    #[inline]
    pub fn is_out_of_china(&self) -> bool {
        out_of_china(self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.longitude, coord.latitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*},{:.*}", p, self.longitude, p, self.latitude),
            None => write!(f, "{},{}", self.longitude, self.latitude),
        }
    }
}

/// Parses `"lng,lat"`, with optional whitespace around either number.
impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let (lng, lat) = s
            .split_once(',')
            .ok_or_else(|| GeoError::InvalidCoordinate(format!("Expected 'lng,lat', got: {}", s)))?;

        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidCoordinate(format!("Invalid longitude: {}", lng.trim())))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidCoordinate(format!("Invalid latitude: {}", lat.trim())))?;

        Ok(Self::new(lng, lat))
    }
}
