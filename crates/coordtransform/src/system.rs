//! Coordinate system names and conversion dispatch.

use crate::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02,
    Coordinate, GeoError, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three supported reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// GPS standard
    Wgs84,
    /// Chinese state "Mars" coordinates
    Gcj02,
    /// Baidu coordinates, layered on GCJ02
    Bd09,
}

impl CoordinateSystem {
    /// All systems, in layering order.
    pub const ALL: [CoordinateSystem; 3] = [Self::Wgs84, Self::Gcj02, Self::Bd09];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wgs84 => "wgs84",
            Self::Gcj02 => "gcj02",
            Self::Bd09 => "bd09",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateSystem {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" | "gps" => Ok(Self::Wgs84),
            "gcj02" | "gcj-02" | "mars" | "amap" => Ok(Self::Gcj02),
            "bd09" | "bd-09" | "baidu" => Ok(Self::Bd09),
            _ => Err(GeoError::UnknownSystem(s.to_string())),
        }
    }
}

/// Converts a coordinate between two named systems.
///
/// Converting a system to itself returns the input unchanged.
///
/// # Example
/// ```
/// use coordtransform::{convert, wgs84_to_bd09, Coordinate, CoordinateSystem};
///
/// let point = Coordinate::new(116.404, 39.915);
/// let bd = convert(point, CoordinateSystem::Wgs84, CoordinateSystem::Bd09);
/// assert_eq!(bd, wgs84_to_bd09(116.404, 39.915));
/// ```
pub fn convert(coord: Coordinate, from: CoordinateSystem, to: CoordinateSystem) -> Coordinate {
    use CoordinateSystem::*;

    let Coordinate { longitude: lng, latitude: lat } = coord;
    match (from, to) {
        (Wgs84, Gcj02) => wgs84_to_gcj02(lng, lat),
        (Gcj02, Wgs84) => gcj02_to_wgs84(lng, lat),
        (Gcj02, Bd09) => gcj02_to_bd09(lng, lat),
        (Bd09, Gcj02) => bd09_to_gcj02(lng, lat),
        (Wgs84, Bd09) => wgs84_to_bd09(lng, lat),
        (Bd09, Wgs84) => bd09_to_wgs84(lng, lat),
        (Wgs84, Wgs84) | (Gcj02, Gcj02) | (Bd09, Bd09) => coord,
    }
}
