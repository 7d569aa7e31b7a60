//! # Vehicle State
//!
//! The single mutable simulation state advanced by the integrator.

/// Instantaneous vehicle state
///
/// Owned exclusively by the generation pipeline and mutated in place; each
/// recorded sample is a copy taken after one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,

    /// Altitude above home in meters
    pub relative_altitude: f64,

    /// Milliseconds elapsed since boot
    pub boot_elapsed_ms: u32,
}

impl VehicleState {
    /// Create a state on the ground (zero altitude, zero boot time)
    pub fn on_ground(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            relative_altitude: 0.0,
            boot_elapsed_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_ground() {
        let state = VehicleState::on_ground(-35.363261, 149.165230);

        assert_eq!(state.latitude, -35.363261);
        assert_eq!(state.longitude, 149.165230);
        assert_eq!(state.relative_altitude, 0.0);
        assert_eq!(state.boot_elapsed_ms, 0);
    }
}
