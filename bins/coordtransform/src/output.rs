//! Terminal output utilities
//!
//! Text mode prints colored labels when stdout supports color; JSON mode
//! prints one object per command.

use coordtransform::{Coordinate, CoordinateSystem};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// Output settings resolved from flags and config
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub precision: usize,
    pub json: bool,
}

/// A single conversion result
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub from: CoordinateSystem,
    pub to: CoordinateSystem,
    pub input: Coordinate,
    pub output: Coordinate,
}

/// A single distance result
#[derive(Debug, Serialize)]
pub struct Distance {
    pub from: Coordinate,
    pub to: Coordinate,
    pub meters: f64,
}

impl Printer {
    /// Print a conversion result
    pub fn conversion(&self, conversion: &Conversion) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(conversion)?);
        } else {
            println!("{}", self.format_conversion(conversion));
        }
        Ok(())
    }

    /// Print a distance result
    pub fn distance(&self, distance: &Distance) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(distance)?);
        } else {
            println!("{}", self.format_distance(distance));
        }
        Ok(())
    }

    fn format_conversion(&self, c: &Conversion) -> String {
        format!(
            "{} {:.p$} {} {} {:.p$}",
            c.from.as_str().if_supports_color(Stream::Stdout, |t| t.dimmed()),
            c.input,
            "→".if_supports_color(Stream::Stdout, |t| t.cyan()),
            c.to.as_str().if_supports_color(Stream::Stdout, |t| t.bold()),
            c.output,
            p = self.precision
        )
    }

    fn format_distance(&self, d: &Distance) -> String {
        format!(
            "{} {:.p$} m",
            "distance".if_supports_color(Stream::Stdout, |t| t.bold()),
            d.meters,
            p = self.precision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        owo_colors::set_override(false);
    }

    #[test]
    fn test_format_conversion_precision() {
        plain();
        let printer = Printer { precision: 3, json: false };
        let conversion = Conversion {
            from: CoordinateSystem::Wgs84,
            to: CoordinateSystem::Gcj02,
            input: Coordinate::new(116.404, 39.915),
            output: Coordinate::new(116.41024449916938, 39.91640428150164),
        };
        assert_eq!(
            printer.format_conversion(&conversion),
            "wgs84 116.404,39.915 → gcj02 116.410,39.916"
        );
    }

    #[test]
    fn test_format_distance() {
        plain();
        let printer = Printer { precision: 2, json: false };
        let distance = Distance {
            from: Coordinate::new(104.070497, 30.588777),
            to: Coordinate::new(104.070785, 30.581813),
            meters: 775.7200765786793,
        };
        assert_eq!(printer.format_distance(&distance), "distance 775.72 m");
    }

    #[test]
    fn test_conversion_json_shape() {
        let conversion = Conversion {
            from: CoordinateSystem::Bd09,
            to: CoordinateSystem::Wgs84,
            input: Coordinate::new(1.0, 2.0),
            output: Coordinate::new(1.0, 2.0),
        };
        let value = serde_json::to_value(&conversion).unwrap();
        assert_eq!(value["from"], "bd09");
        assert_eq!(value["to"], "wgs84");
        assert_eq!(value["output"]["longitude"], 1.0);
    }
}
