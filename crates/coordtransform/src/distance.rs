//! Great-circle distance by the spherical law of cosines.
//!
//! Both points are projected onto a sphere of radius [`EARTH_RADIUS`] in 3D
//! Cartesian space. The chord between them gives the central angle through
//! the law of cosines, and the arc length is that angle times the radius.
//! The result is in meters because [`EARTH_RADIUS`] is.

use crate::consts::{EARTH_RADIUS, PI};
use crate::Coordinate;

/// Converts degrees to radians.
#[inline]
pub fn rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Calculates the distance between two points in meters.
///
/// Identical points short-circuit to exactly `0.0`, which keeps `acos` away
/// from arguments rounded just past 1.
///
/// # Arguments
/// * `lon1` - Longitude of the first point in degrees
/// * `lat1` - Latitude of the first point in degrees
/// * `lon2` - Longitude of the second point in degrees
/// * `lat2` - Latitude of the second point in degrees
///
/// # Returns
/// Distance in meters
///
/// # Example
/// ```
/// use coordtransform::distance;
///
/// let meters = distance(104.070497, 30.588777, 104.070785, 30.581813);
/// assert!((meters - 775.72).abs() < 0.01);
/// ```
pub fn distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    if lon1 == lon2 && lat1 == lat2 {
        return 0.0;
    }

    let (x1, y1, z1) = to_cartesian(lon1, lat1);
    let (x2, y2, z2) = to_cartesian(lon2, lat2);

    let d = ((x1 - x2) * (x1 - x2) + (y1 - y2) * (y1 - y2) + (z1 - z2) * (z1 - z2)).sqrt();

    let theta = ((EARTH_RADIUS * EARTH_RADIUS + EARTH_RADIUS * EARTH_RADIUS - d * d)
        / (2.0 * EARTH_RADIUS * EARTH_RADIUS))
        .acos();

    theta * EARTH_RADIUS
}

/// Calculates the distance between two coordinates in meters.
///
/// Same computation as [`distance`].
#[inline]
pub fn distance_between(from: &Coordinate, to: &Coordinate) -> f64 {
    distance(from.longitude, from.latitude, to.longitude, to.latitude)
}

/// Folds a point into polar angle and azimuth and projects it onto the sphere.
///
/// The hemisphere checks are sequential, not exclusive. A southern latitude
/// first becomes `π/2 + |lat|`, which is positive, so the northern branch then
/// runs too and leaves `-|lat|`. Southern points therefore land mirrored into
/// the northern polar cap. Existing callers depend on these numbers.
///
/// A latitude of exactly zero matches neither hemisphere and stays at zero,
/// which places it on the polar axis.
#[inline]
fn to_cartesian(lon: f64, lat: f64) -> (f64, f64, f64) {
    let mut rad_lat = rad(lat);
    let mut rad_lon = rad(lon);

    if rad_lat < 0.0 {
        // south, then falls into the north branch below
        rad_lat = PI / 2.0 + rad_lat.abs();
    }
    if rad_lat > 0.0 {
        // north
        rad_lat = PI / 2.0 - rad_lat.abs();
    }
    if rad_lon < 0.0 {
        // west
        rad_lon = PI * 2.0 - rad_lon.abs();
    }

    (
        EARTH_RADIUS * rad_lon.cos() * rad_lat.sin(),
        EARTH_RADIUS * rad_lon.sin() * rad_lat.sin(),
        EARTH_RADIUS * rad_lat.cos(),
    )
}
