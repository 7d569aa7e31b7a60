//! # tlog-gen
//!
//! One-shot batch generator for MAVLink `.tlog` mission logs.
//!
//! Simulates an aerial vehicle flying a scripted mission (clean square loop,
//! altitude-violation loop, no-fly-zone-violation loop) and writes every
//! position sample as a timestamped GLOBAL_POSITION_INT frame, producing a
//! log suitable for exercising geofence and altitude-violation analyzers.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use tlog_gen::mavlink::encoder::Encoder;
use tlog_gen::mavlink::protocol::WireVersion;
use tlog_gen::scenario::{self, HOME_LAT, HOME_LON};
use tlog_gen::sim::VehicleState;
use tlog_gen::tlog::TlogWriter;

/// Synthesize a MAVLink .tlog mission log
#[derive(Debug, Parser)]
#[command(name = "tlog-gen", version, about)]
struct Args {
    /// Output .tlog path
    #[arg(short, long, default_value = "mission.tlog")]
    output: PathBuf,

    /// Sample rate in Hz (position records per simulated second)
    #[arg(short, long, default_value_t = 10)]
    rate: u32,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    ensure!(args.rate > 0, "sample rate must be at least 1 Hz");

    let version = WireVersion::from_env()?;
    info!(
        "tlog-gen v{} starting ({:?} framing, {} Hz)",
        env!("CARGO_PKG_VERSION"),
        version,
        args.rate
    );

    let mut writer = TlogWriter::create(&args.output)
        .with_context(|| format!("cannot create output file {}", args.output.display()))?;
    let mut encoder = Encoder::new(version);
    let mut state = VehicleState::on_ground(HOME_LAT, HOME_LON);

    scenario::run(&scenario::mission(), &mut state, args.rate, &mut encoder, &mut writer)?;

    let frames = writer.frames_written();
    writer.finish()?;
    info!("Wrote {} frames to {}", frames, args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["tlog-gen"]);
        assert_eq!(args.output, PathBuf::from("mission.tlog"));
        assert_eq!(args.rate, 10);
    }

    #[test]
    fn test_rate_flag() {
        let args = Args::parse_from(["tlog-gen", "--rate", "25", "-o", "out.tlog"]);
        assert_eq!(args.rate, 25);
        assert_eq!(args.output, PathBuf::from("out.tlog"));
    }
}
