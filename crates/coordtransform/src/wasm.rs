//! WASM bindings for the coordtransform crate.
//!
//! These bindings allow the conversions to be used from JavaScript/TypeScript
//! in both browser and Deno environments. Coordinates come back as a
//! `Float64Array` of `[lng, lat]`.

use crate::{Coordinate, CoordinateSystem};
use wasm_bindgen::prelude::*;

#[inline]
fn pair(coord: Coordinate) -> Box<[f64]> {
    Box::new([coord.longitude, coord.latitude])
}

/// WGS84 to GCJ02. Returns `[lng, lat]`.
#[wasm_bindgen(js_name = wgs84ToGcj02)]
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> Box<[f64]> {
    pair(crate::wgs84_to_gcj02(lng, lat))
}

/// GCJ02 to WGS84. Returns `[lng, lat]`.
#[wasm_bindgen(js_name = gcj02ToWgs84)]
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> Box<[f64]> {
    pair(crate::gcj02_to_wgs84(lng, lat))
}

/// BD09 to GCJ02. Returns `[lng, lat]`.
#[wasm_bindgen(js_name = bd09ToGcj02)]
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> Box<[f64]> {
    pair(crate::bd09_to_gcj02(lng, lat))
}

/// GCJ02 to BD09. Returns `[lng, lat]`.
#[wasm_bindgen(js_name = gcj02ToBd09)]
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> Box<[f64]> {
    pair(crate::gcj02_to_bd09(lng, lat))
}

/// WGS84 to BD09. Returns `[lng, lat]`.
#[wasm_bindgen(js_name = wgs84ToBd09)]
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> Box<[f64]> {
    pair(crate::wgs84_to_bd09(lng, lat))
}

/// BD09 to WGS84. Returns `[lng, lat]`.
#[wasm_bindgen(js_name = bd09ToWgs84)]
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> Box<[f64]> {
    pair(crate::bd09_to_wgs84(lng, lat))
}

/// Calculate distance between two points.
///
/// # Arguments
/// * `lon1` - Longitude of first point
/// * `lat1` - Latitude of first point
/// * `lon2` - Longitude of second point
/// * `lat2` - Latitude of second point
///
/// # Returns
/// Distance in meters
#[wasm_bindgen]
pub fn distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    crate::distance(lon1, lat1, lon2, lat2)
}

/// Whether GCJ02 offsetting is skipped for this point.
#[wasm_bindgen(js_name = outOfChina)]
pub fn out_of_china(lng: f64, lat: f64) -> bool {
    crate::out_of_china(lng, lat)
}

/// Convert between named systems (`wgs84`, `gcj02`, `bd09`).
///
/// # Returns
/// `[lng, lat]`, or an error string for an unknown system name
#[wasm_bindgen]
pub fn convert(lng: f64, lat: f64, from: &str, to: &str) -> Result<Box<[f64]>, JsValue> {
    let from = from
        .parse::<CoordinateSystem>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let to = to
        .parse::<CoordinateSystem>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(pair(crate::convert(Coordinate::new(lng, lat), from, to)))
}
