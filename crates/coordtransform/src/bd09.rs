//! BD09 conversions.
//!
//! BD09 sits on top of GCJ02: a fixed shift plus a small polar correction.
//! The forward and backward formulas are not exact inverses, so a
//! GCJ02 → BD09 → GCJ02 round trip drifts by a few micro-degrees.

use crate::consts::X_PI;
use crate::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
use crate::Coordinate;

/// Converts a GCJ02 point to BD09.
///
/// # Example
/// ```
/// use coordtransform::gcj02_to_bd09;
///
/// let bd = gcj02_to_bd09(116.404, 39.915);
/// assert!((bd.longitude - 116.41036949371029).abs() < 1e-9);
/// assert!((bd.latitude - 39.92133699351021).abs() < 1e-9);
/// ```
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> Coordinate {
    let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
    Coordinate::new(z * theta.cos() + 0.0065, z * theta.sin() + 0.006)
}

/// Converts a BD09 point to GCJ02.
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> Coordinate {
    let x = lng - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    Coordinate::new(z * theta.cos(), z * theta.sin())
}

/// Converts a WGS84 point to BD09 by way of GCJ02.
///
/// # Example
/// ```
/// use coordtransform::wgs84_to_bd09;
///
/// let bd = wgs84_to_bd09(104.03604907542808, 30.623654551828945);
/// assert!((bd.longitude - 104.0449054907395).abs() < 1e-9);
/// assert!((bd.latitude - 30.627475012958595).abs() < 1e-9);
/// ```
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> Coordinate {
    let gcj = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(gcj.longitude, gcj.latitude)
}

/// Converts a BD09 point to WGS84 by way of GCJ02.
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> Coordinate {
    let gcj = bd09_to_gcj02(lng, lat);
    gcj02_to_wgs84(gcj.longitude, gcj.latitude)
}
