//! # Scenario Composer Module
//!
//! Named scenario runs expressed as segment lists, and the driver that turns
//! them into a written `.tlog` file.
//!
//! This module handles:
//! - The canonical mission geometry (square loop, altitude excursion, NFZ
//!   diversion)
//! - Sequencing segments through the integrator → encoder → writer pipeline

use tracing::{debug, info};

use crate::error::Result;
use crate::mavlink::encoder::Encoder;
use crate::mavlink::protocol::{GlobalPositionInt, HEADING_CENTIDEG};
use crate::sim::{advance, Segment, VehicleState};
use crate::tlog::{wall_clock_micros, TlogWriter};

/// Home latitude in degrees (ArduPilot SITL default location, CMAC)
pub const HOME_LAT: f64 = -35.363261;

/// Home longitude in degrees
pub const HOME_LON: f64 = 149.165230;

/// No-fly zone center latitude in degrees (north-west of home)
pub const NFZ_LAT: f64 = -35.362000;

/// No-fly zone center longitude in degrees
pub const NFZ_LON: f64 = 149.164000;

/// No-fly zone radius in meters
pub const NFZ_RADIUS_M: f64 = 50.0;

/// Regulatory altitude limit in meters
pub const ALTITUDE_LIMIT_M: f64 = 120.0;

/// Square loop edge length in degrees (~200 m)
const LOOP_OFFSET_DEG: f64 = 0.002;

/// Cruise altitude for clean legs in meters
const CRUISE_ALT_M: f64 = 40.0;

/// Duration of one loop leg in seconds
const LEG_DURATION_S: f64 = 8.0;

/// Duration of the home dwell after a lap in seconds
const DWELL_DURATION_S: f64 = 2.0;

/// Duration of takeoff and landing in seconds
const VERTICAL_DURATION_S: f64 = 5.0;

/// Duration of the NFZ diversion legs in seconds
const NFZ_LEG_DURATION_S: f64 = 10.0;

/// A named scenario run: an ordered list of segments
///
/// Scenarios are data, not control flow; adding another run is a matter of
/// appending to the mission list.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Human-readable run name, used for progress logging
    pub name: &'static str,

    /// Segments flown strictly in order
    pub segments: Vec<Segment>,
}

/// The canonical mission: takeoff, three laps, landing
///
/// Each lap ends back at home; the clean-shaped laps are followed by a short
/// dwell (target = current position) so downstream analyzers can detect loop
/// completion via a stationary hold.
pub fn mission() -> Vec<Scenario> {
    vec![takeoff(), clean_lap(), altitude_violation_lap(), nfz_violation_lap(), landing()]
}

/// Climb from home ground level to cruise altitude
fn takeoff() -> Scenario {
    Scenario {
        name: "takeoff",
        segments: vec![Segment::new(HOME_LAT, HOME_LON, CRUISE_ALT_M, VERTICAL_DURATION_S)],
    }
}

/// Square loop at cruise altitude: east, north-east, north-west, home
fn clean_lap() -> Scenario {
    Scenario {
        name: "lap 1: clean loop",
        segments: vec![
            Segment::new(HOME_LAT, HOME_LON + LOOP_OFFSET_DEG, CRUISE_ALT_M, LEG_DURATION_S),
            Segment::new(
                HOME_LAT + LOOP_OFFSET_DEG,
                HOME_LON + LOOP_OFFSET_DEG,
                CRUISE_ALT_M,
                LEG_DURATION_S,
            ),
            Segment::new(HOME_LAT + LOOP_OFFSET_DEG, HOME_LON, CRUISE_ALT_M, LEG_DURATION_S),
            Segment::new(HOME_LAT, HOME_LON, CRUISE_ALT_M, LEG_DURATION_S),
            // Dwell at home so lap completion is detectable
            Segment::new(HOME_LAT, HOME_LON, CRUISE_ALT_M, DWELL_DURATION_S),
        ],
    }
}

/// Same loop shape, but climbing to 135 m on the second leg and holding
/// 130 m on the third (limit is 120 m), descending on the way home
fn altitude_violation_lap() -> Scenario {
    Scenario {
        name: "lap 2: altitude violation",
        segments: vec![
            Segment::new(HOME_LAT, HOME_LON + LOOP_OFFSET_DEG, CRUISE_ALT_M, LEG_DURATION_S),
            Segment::new(
                HOME_LAT + LOOP_OFFSET_DEG,
                HOME_LON + LOOP_OFFSET_DEG,
                135.0,
                LEG_DURATION_S,
            ),
            Segment::new(HOME_LAT + LOOP_OFFSET_DEG, HOME_LON, 130.0, LEG_DURATION_S),
            Segment::new(HOME_LAT, HOME_LON, CRUISE_ALT_M, LEG_DURATION_S),
            Segment::new(HOME_LAT, HOME_LON, CRUISE_ALT_M, DWELL_DURATION_S),
        ],
    }
}

/// Same loop start, but the north-west corner is replaced by the no-fly-zone
/// center
fn nfz_violation_lap() -> Scenario {
    Scenario {
        name: "lap 3: no-fly-zone violation",
        segments: vec![
            Segment::new(HOME_LAT, HOME_LON + LOOP_OFFSET_DEG, CRUISE_ALT_M, LEG_DURATION_S),
            Segment::new(
                HOME_LAT + LOOP_OFFSET_DEG,
                HOME_LON + LOOP_OFFSET_DEG,
                CRUISE_ALT_M,
                LEG_DURATION_S,
            ),
            Segment::new(NFZ_LAT, NFZ_LON, CRUISE_ALT_M, NFZ_LEG_DURATION_S),
            Segment::new(HOME_LAT, HOME_LON, CRUISE_ALT_M, NFZ_LEG_DURATION_S),
        ],
    }
}

/// Descend from cruise altitude back to the ground at home
fn landing() -> Scenario {
    Scenario {
        name: "landing",
        segments: vec![Segment::new(HOME_LAT, HOME_LON, 0.0, VERTICAL_DURATION_S)],
    }
}

/// Fly the scenario runs and persist every sample to the log
///
/// Executes segments strictly in program order, single-threaded: integrate
/// each segment, render each snapshot as a GLOBAL_POSITION_INT frame, and
/// append it with a fresh wall-clock capture timestamp.
///
/// # Arguments
///
/// * `scenarios` - Runs to fly, in order
/// * `state` - Vehicle state carried across segments and runs
/// * `sample_rate_hz` - Samples per second
/// * `encoder` - Frame encoder (owns the sequence counter)
/// * `writer` - Open log writer
///
/// # Errors
///
/// Returns error if appending to the log fails
pub fn run(
    scenarios: &[Scenario],
    state: &mut VehicleState,
    sample_rate_hz: u32,
    encoder: &mut Encoder,
    writer: &mut TlogWriter,
) -> Result<()> {
    for scenario in scenarios {
        info!("Flying scenario: {}", scenario.name);

        for segment in &scenario.segments {
            let samples = advance(state, segment, sample_rate_hz);
            debug!(
                "segment to ({:.6}, {:.6}, {:.1}m) over {}s: {} samples",
                segment.target_latitude,
                segment.target_longitude,
                segment.target_altitude,
                segment.duration_s,
                samples.len()
            );

            for sample in &samples {
                let msg = GlobalPositionInt::from_state(sample, HEADING_CENTIDEG);
                let frame = encoder.encode(&msg);
                writer.append(wall_clock_micros(), &frame)?;
            }
        }
    }

    Ok(())
}
