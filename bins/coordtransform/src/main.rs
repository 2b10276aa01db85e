//! coordtransform: convert coordinates between WGS84, GCJ02 and BD09.

mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use coordtransform::{convert, distance_between, Coordinate, CoordinateSystem};
use output::{Conversion, Distance, Printer};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sample point converted by `demo`.
const DEMO_POINT: Coordinate = Coordinate {
    longitude: 104.03604907542808,
    latitude: 30.623654551828945,
};

/// Sample pair measured by `demo`.
const DEMO_SEGMENT: (Coordinate, Coordinate) = (
    Coordinate { longitude: 104.070497, latitude: 30.588777 },
    Coordinate { longitude: 104.070785, latitude: 30.581813 },
);

#[derive(Parser)]
#[command(name = "coordtransform")]
#[command(about = "Convert coordinates between WGS84, GCJ02 and BD09")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Decimal places for text output
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a point from one system to another
    Convert {
        /// Source system (wgs84, gcj02, bd09)
        #[arg(long, short)]
        from: CoordinateSystem,

        /// Target system (wgs84, gcj02, bd09)
        #[arg(long, short)]
        to: CoordinateSystem,

        /// Point as "lng,lat"
        #[arg(allow_hyphen_values = true)]
        point: Coordinate,
    },

    /// Distance in meters between two points
    Distance {
        /// First point as "lng,lat"
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,

        /// Second point as "lng,lat"
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Print a sample conversion and a sample distance
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    init_logging(&config, cli.verbose)?;
    tracing::debug!(path = ?config.path, "Configuration loaded");

    let printer = Printer {
        precision: cli.precision.unwrap_or(config.schema.output.precision),
        json: cli.json || config.schema.output.json,
    };

    match cli.command {
        Commands::Convert { from, to, point } => {
            let output = convert(point, from, to);
            tracing::debug!(%from, %to, input = %point, %output, "Converted");
            if let Some(gcj_step) =
                gcj02_step_input(point, from, to).filter(Coordinate::is_out_of_china)
            {
                tracing::info!(point = %gcj_step, "Point is outside China, GCJ02 offset skipped");
            }
            printer.conversion(&Conversion { from, to, input: point, output })?;
        }

        Commands::Distance { from, to } => {
            let meters = distance_between(&from, &to);
            tracing::debug!(%from, %to, meters, "Measured");
            printer.distance(&Distance { from, to, meters })?;
        }

        Commands::Demo => {
            let (from, to) = (CoordinateSystem::Wgs84, CoordinateSystem::Bd09);
            printer.conversion(&Conversion {
                from,
                to,
                input: DEMO_POINT,
                output: convert(DEMO_POINT, from, to),
            })?;

            let (a, b) = DEMO_SEGMENT;
            printer.distance(&Distance { from: a, to: b, meters: distance_between(&a, &b) })?;
        }
    }

    Ok(())
}

/// The point handed to the WGS84 ↔ GCJ02 step of a conversion, if it has one.
fn gcj02_step_input(
    point: Coordinate,
    from: CoordinateSystem,
    to: CoordinateSystem,
) -> Option<Coordinate> {
    use CoordinateSystem::*;

    match (from, to) {
        (Wgs84, Gcj02) | (Wgs84, Bd09) | (Gcj02, Wgs84) => Some(point),
        (Bd09, Wgs84) => Some(convert(point, Bd09, Gcj02)),
        _ => None,
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over config and `--verbose`.
fn init_logging(config: &Config, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.schema.logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use CoordinateSystem::*;

    const BERLIN: Coordinate = Coordinate { longitude: 13.4050, latitude: 52.5200 };

    #[test]
    fn test_gcj02_step_only_for_crossing_conversions() {
        assert_eq!(gcj02_step_input(BERLIN, Wgs84, Gcj02), Some(BERLIN));
        assert_eq!(gcj02_step_input(BERLIN, Wgs84, Bd09), Some(BERLIN));
        assert_eq!(gcj02_step_input(BERLIN, Gcj02, Wgs84), Some(BERLIN));

        assert_eq!(gcj02_step_input(BERLIN, Gcj02, Bd09), None);
        assert_eq!(gcj02_step_input(BERLIN, Bd09, Gcj02), None);
        for system in CoordinateSystem::ALL {
            assert_eq!(gcj02_step_input(BERLIN, system, system), None);
        }
    }

    #[test]
    fn test_gcj02_step_for_bd09_uses_intermediate_point() {
        let step = gcj02_step_input(BERLIN, Bd09, Wgs84).unwrap();
        assert_eq!(step, coordtransform::bd09_to_gcj02(BERLIN.longitude, BERLIN.latitude));
        assert_ne!(step, BERLIN);
    }

    #[test]
    fn test_bd09_edge_point_checked_after_shift() {
        // Inside the box as BD09, outside once shifted back to GCJ02.
        let point = Coordinate::new(72.0100, 30.0);
        assert!(!point.is_out_of_china());
        let step = gcj02_step_input(point, Bd09, Wgs84).unwrap();
        assert!(step.is_out_of_china());
    }
}
