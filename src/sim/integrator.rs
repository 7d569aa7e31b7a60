//! # Position Integrator
//!
//! Advances the vehicle state toward a segment target by linear
//! interpolation at a fixed sample rate.

use super::state::VehicleState;

/// One scripted straight-line move toward a target over a fixed duration
///
/// Immutable once constructed; consumed once by [`advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Target latitude in degrees
    pub target_latitude: f64,

    /// Target longitude in degrees
    pub target_longitude: f64,

    /// Target altitude above home in meters
    pub target_altitude: f64,

    /// Duration of the move in seconds
    pub duration_s: f64,
}

impl Segment {
    /// Create a segment toward the given target
    pub fn new(target_latitude: f64, target_longitude: f64, target_altitude: f64, duration_s: f64) -> Self {
        Self {
            target_latitude,
            target_longitude,
            target_altitude,
            duration_s,
        }
    }
}

/// Advance the state toward the segment target, emitting one snapshot per
/// sample
///
/// The step count is `floor(duration_s × sample_rate_hz)`. Per-axis step
/// sizes are computed once from the state at segment entry and applied by
/// repeated addition, so cumulative floating-point drift is expected; the
/// state is not guaranteed to equal the target exactly afterwards. Each step
/// advances `boot_elapsed_ms` by `1000 / sample_rate_hz` (integer
/// truncation).
///
/// # Arguments
///
/// * `state` - Vehicle state to mutate in place
/// * `segment` - Target and duration of the move
/// * `sample_rate_hz` - Samples per second (must be nonzero)
///
/// # Returns
///
/// * `Vec<VehicleState>` - Ordered snapshots, one per step; empty for
///   degenerate (zero or negative duration) segments
pub fn advance(state: &mut VehicleState, segment: &Segment, sample_rate_hz: u32) -> Vec<VehicleState> {
    if segment.duration_s <= 0.0 {
        return Vec::new();
    }

    let steps = (segment.duration_s * sample_rate_hz as f64).floor() as u32;
    if steps == 0 {
        return Vec::new();
    }

    let lat_step = (segment.target_latitude - state.latitude) / steps as f64;
    let lon_step = (segment.target_longitude - state.longitude) / steps as f64;
    let alt_step = (segment.target_altitude - state.relative_altitude) / steps as f64;
    let tick_ms = 1000 / sample_rate_hz;

    let mut samples = Vec::with_capacity(steps as usize);
    for _ in 0..steps {
        state.boot_elapsed_ms += tick_ms;
        state.latitude += lat_step;
        state.longitude += lon_step;
        state.relative_altitude += alt_step;
        samples.push(*state);
    }

    samples
}
