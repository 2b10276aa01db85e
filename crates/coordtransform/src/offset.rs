//! GCJ02 perturbation polynomials and the mainland China bounding box.
//!
//! Both polynomials take a point already shifted by the reference origin
//! (105°E, 35°N) and return a raw correction that the ellipsoid scaling in
//! [`crate::gcj02`] turns into degrees.

use crate::consts::PI;

/// Bounding box that gates every WGS84 ↔ GCJ02 offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Western edge in degrees
    pub min_lng: f64,
    /// Eastern edge in degrees
    pub max_lng: f64,
    /// Southern edge in degrees
    pub min_lat: f64,
    /// Northern edge in degrees
    pub max_lat: f64,
}

/// Approximate extent of mainland China.
pub const CHINA_BOUNDS: Bounds = Bounds {
    min_lng: 72.004,
    max_lng: 137.8347,
    min_lat: 0.8293,
    max_lat: 55.8271,
};

/// Returns true when the point lies outside [`CHINA_BOUNDS`].
///
/// Points exactly on an edge count as inside. NaN inputs compare false on
/// every edge and are therefore treated as inside.
///
/// # Example
/// ```
/// use coordtransform::out_of_china;
///
/// assert!(!out_of_china(116.404, 39.915)); // Beijing
/// assert!(out_of_china(13.4050, 52.5200)); // Berlin
/// ```
#[inline]
pub fn out_of_china(lng: f64, lat: f64) -> bool {
    lng < CHINA_BOUNDS.min_lng
        || lng > CHINA_BOUNDS.max_lng
        || lat < CHINA_BOUNDS.min_lat
        || lat > CHINA_BOUNDS.max_lat
}

/// Latitude perturbation for an origin-shifted point.
#[inline]
pub fn transform_lat(lng: f64, lat: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * lng + 3.0 * lat + 0.2 * lat * lat + 0.1 * lng * lat
        + 0.2 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lat * PI).sin() + 40.0 * (lat / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (lat / 12.0 * PI).sin() + 320.0 * (lat * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Longitude perturbation for an origin-shifted point.
#[inline]
pub fn transform_lng(lng: f64, lat: f64) -> f64 {
    let mut ret = 300.0 + lng + 2.0 * lat + 0.1 * lng * lng + 0.1 * lng * lat
        + 0.1 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lng * PI).sin() + 40.0 * (lng / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (lng / 12.0 * PI).sin() + 300.0 * (lng / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
