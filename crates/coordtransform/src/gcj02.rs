//! WGS84 ↔ GCJ02 conversion.
//!
//! GCJ02 adds a non-linear, position-dependent offset to WGS84 inside
//! mainland China. Outside [`CHINA_BOUNDS`](crate::CHINA_BOUNDS) both
//! directions are the identity.

use crate::consts::{A, EE, PI};
use crate::offset::{out_of_china, transform_lat, transform_lng};
use crate::Coordinate;

/// Converts a WGS84 point to GCJ02.
///
/// # Arguments
/// * `lng` - WGS84 longitude in degrees
/// * `lat` - WGS84 latitude in degrees
///
/// # Returns
/// The GCJ02 coordinate, or the input unchanged outside China.
///
/// # Example
/// ```
/// use coordtransform::wgs84_to_gcj02;
///
/// let gcj = wgs84_to_gcj02(116.404, 39.915);
/// assert!((gcj.longitude - 116.41024449916938).abs() < 1e-9);
/// assert!((gcj.latitude - 39.91640428150164).abs() < 1e-9);
/// ```
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> Coordinate {
    if out_of_china(lng, lat) {
        return Coordinate::new(lng, lat);
    }
    offset(lng, lat)
}

/// Converts a GCJ02 point back to WGS84.
///
/// The offset is evaluated at the GCJ02 point itself and reflected, so this is
/// a one-step approximation of the inverse. The residual is around 1e-6° near
/// the reference origin and grows to about 5e-5° (a few meters) at the edges
/// of the country.
/// It is not an analytic inverse of [`wgs84_to_gcj02`].
///
/// # Arguments
/// * `lng` - GCJ02 longitude in degrees
/// * `lat` - GCJ02 latitude in degrees
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> Coordinate {
    if out_of_china(lng, lat) {
        return Coordinate::new(lng, lat);
    }
    let shifted = offset(lng, lat);
    Coordinate::new(lng * 2.0 - shifted.longitude, lat * 2.0 - shifted.latitude)
}

/// Applies the GCJ02 perturbation to a point, scaled by the Krasovsky
/// ellipsoid's radii of curvature at its latitude.
#[inline]
fn offset(lng: f64, lat: f64) -> Coordinate {
    let dlat = transform_lat(lng - 105.0, lat - 35.0);
    let dlng = transform_lng(lng - 105.0, lat - 35.0);

    let radlat = lat / 180.0 * PI;
    let magic = radlat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrtmagic = magic.sqrt();

    let dlat = (dlat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrtmagic) * PI);
    let dlng = (dlng * 180.0) / (A / sqrtmagic * radlat.cos() * PI);

    Coordinate::new(lng + dlng, lat + dlat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn assert_close(got: Coordinate, lng: f64, lat: f64) {
        assert!(
            (got.longitude - lng).abs() < EPS && (got.latitude - lat).abs() < EPS,
            "got {got}, want {lng},{lat}"
        );
    }

    #[test]
    fn test_wgs84_to_gcj02_chengdu() {
        let gcj = wgs84_to_gcj02(104.03604907542808, 30.623654551828945);
        assert_close(gcj, 104.03847989696993, 30.621158833046085);
    }

    #[test]
    fn test_wgs84_to_gcj02_beijing() {
        assert_close(wgs84_to_gcj02(116.404, 39.915), 116.41024449916938, 39.91640428150164);
    }

    #[test]
    fn test_gcj02_to_wgs84_is_reflection() {
        // Reflecting about the input, not subtracting a delta from the shifted point.
        let wgs = gcj02_to_wgs84(121.4737, 31.2304);
        assert_close(wgs, 121.46917694072306, 31.23234226242273);

        let shifted = wgs84_to_gcj02(121.4737, 31.2304);
        assert!((wgs.longitude + shifted.longitude - 2.0 * 121.4737).abs() < EPS);
        assert!((wgs.latitude + shifted.latitude - 2.0 * 31.2304).abs() < EPS);
    }

    #[test]
    fn test_round_trip_is_close_but_not_exact() {
        let (lng, lat) = (116.404, 39.915);
        let gcj = wgs84_to_gcj02(lng, lat);
        let back = gcj02_to_wgs84(gcj.longitude, gcj.latitude);

        assert!((back.longitude - lng).abs() < 1e-5);
        assert!((back.latitude - lat).abs() < 1e-5);
        assert_ne!(back, Coordinate::new(lng, lat));
    }

    #[test]
    fn test_outside_china_is_identity() {
        let berlin = wgs84_to_gcj02(13.4050, 52.5200);
        assert_eq!(berlin, Coordinate::new(13.4050, 52.5200));

        let sydney = gcj02_to_wgs84(151.2093, -33.8688);
        assert_eq!(sydney, Coordinate::new(151.2093, -33.8688));
    }

    #[test]
    fn test_out_of_range_input_is_not_rejected() {
        let result = wgs84_to_gcj02(200.0, 95.0);
        assert_eq!(result, Coordinate::new(200.0, 95.0));
    }

    proptest! {
        #[test]
        fn identity_outside_china(lng in -180.0f64..72.0, lat in -90.0f64..90.0) {
            prop_assert_eq!(wgs84_to_gcj02(lng, lat), Coordinate::new(lng, lat));
            prop_assert_eq!(gcj02_to_wgs84(lng, lat), Coordinate::new(lng, lat));
        }

        #[test]
        fn identity_north_of_china(lng in 72.004f64..137.8347, lat in 55.83f64..90.0) {
            prop_assert_eq!(wgs84_to_gcj02(lng, lat), Coordinate::new(lng, lat));
            prop_assert_eq!(gcj02_to_wgs84(lng, lat), Coordinate::new(lng, lat));
        }

        #[test]
        fn round_trip_within_tolerance(lng in 75.0f64..135.0, lat in 18.0f64..53.0) {
            let gcj = wgs84_to_gcj02(lng, lat);
            let back = gcj02_to_wgs84(gcj.longitude, gcj.latitude);
            prop_assert!((back.longitude - lng).abs() < 1e-4);
            prop_assert!((back.latitude - lat).abs() < 1e-4);
        }
    }
}
