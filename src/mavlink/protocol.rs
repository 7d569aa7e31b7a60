//! # MAVLink Protocol Constants and Types
//!
//! Message and framing definitions for the single message family this
//! generator emits: GLOBAL_POSITION_INT (#33).

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, TlogGenError};
use crate::sim::state::VehicleState;

/// MAVLink 1 frame start byte (legacy framing)
pub const MAVLINK_STX_V1: u8 = 0xFE;

/// MAVLink 2 frame start byte (extended framing)
pub const MAVLINK_STX_V2: u8 = 0xFD;

/// GLOBAL_POSITION_INT message id
pub const MSG_ID_GLOBAL_POSITION_INT: u32 = 33;

/// GLOBAL_POSITION_INT payload size in bytes (untruncated)
pub const GLOBAL_POSITION_INT_PAYLOAD_SIZE: usize = 28;

/// CRC_EXTRA byte for GLOBAL_POSITION_INT, per the MAVLink common dialect
pub const GLOBAL_POSITION_INT_CRC_EXTRA: u8 = 104;

/// System id stamped into every emitted frame
pub const SYSTEM_ID: u8 = 1;

/// Component id stamped into every emitted frame
pub const COMPONENT_ID: u8 = 1;

/// Constant heading for the whole run (4500 centidegrees = 45.00°)
pub const HEADING_CENTIDEG: u16 = 4500;

/// Environment variable selecting the wire-format major version
pub const WIRE_VERSION_ENV: &str = "MAVLINK20";

/// MAVLink wire-format major version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireVersion {
    /// Legacy 0xFE framing (8-bit message id)
    V1,
    /// Extended 0xFD framing (24-bit message id, payload truncation)
    V2,
}

impl WireVersion {
    /// Select the wire version from the `MAVLINK20` environment variable
    ///
    /// Unset or `1` selects MAVLink 2; `0` selects the legacy MAVLink 1
    /// framing.
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set to anything other than `0` or `1`
    pub fn from_env() -> Result<Self> {
        match std::env::var(WIRE_VERSION_ENV) {
            Err(_) => Ok(WireVersion::V2),
            Ok(value) => Self::parse(&value),
        }
    }

    /// Parse a wire version selector (`0` = MAVLink 1, `1` = MAVLink 2)
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "0" => Ok(WireVersion::V1),
            "1" => Ok(WireVersion::V2),
            other => Err(TlogGenError::MavlinkProtocol(format!(
                "unsupported {} value '{}' (expected 0 or 1)",
                WIRE_VERSION_ENV, other
            ))),
        }
    }
}

/// GLOBAL_POSITION_INT message fields
///
/// Field order matches the wire order of the common dialect (32-bit fields
/// first, then 16-bit fields), all little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalPositionInt {
    /// Milliseconds since boot
    pub time_boot_ms: u32,

    /// Latitude in degrees × 1e7
    pub lat: i32,

    /// Longitude in degrees × 1e7
    pub lon: i32,

    /// Altitude (MSL) in millimeters
    pub alt: i32,

    /// Altitude above home in millimeters
    pub relative_alt: i32,

    /// Ground speed X (cm/s)
    pub vx: i16,

    /// Ground speed Y (cm/s)
    pub vy: i16,

    /// Ground speed Z (cm/s)
    pub vz: i16,

    /// Heading in centidegrees
    pub hdg: u16,
}

impl GlobalPositionInt {
    /// Build a message from an instantaneous vehicle state
    ///
    /// Latitude and longitude are scaled by 1e7 and altitude by 1e3, all
    /// truncated toward zero. The generator does not model true sea-level
    /// altitude, so `alt` carries the same home-relative value as
    /// `relative_alt`. Velocities are zero.
    ///
    /// # Arguments
    ///
    /// * `state` - Vehicle state snapshot to encode
    /// * `hdg_centideg` - Heading in centidegrees
    ///
    /// # Returns
    ///
    /// * `GlobalPositionInt` - Message with integer-scaled fields
    pub fn from_state(state: &VehicleState, hdg_centideg: u16) -> Self {
        let alt_mm = (state.relative_altitude * 1e3) as i32;

        Self {
            time_boot_ms: state.boot_elapsed_ms,
            lat: (state.latitude * 1e7) as i32,
            lon: (state.longitude * 1e7) as i32,
            alt: alt_mm,
            relative_alt: alt_mm,
            vx: 0,
            vy: 0,
            vz: 0,
            hdg: hdg_centideg,
        }
    }

    /// Pack the message fields into the 28-byte wire payload
    pub fn payload(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(GLOBAL_POSITION_INT_PAYLOAD_SIZE);
        buf.put_u32_le(self.time_boot_ms);
        buf.put_i32_le(self.lat);
        buf.put_i32_le(self.lon);
        buf.put_i32_le(self.alt);
        buf.put_i32_le(self.relative_alt);
        buf.put_i16_le(self.vx);
        buf.put_i16_le(self.vy);
        buf.put_i16_le(self.vz);
        buf.put_u16_le(self.hdg);
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(lat: f64, lon: f64, alt: f64, boot_ms: u32) -> VehicleState {
        VehicleState {
            latitude: lat,
            longitude: lon,
            relative_altitude: alt,
            boot_elapsed_ms: boot_ms,
        }
    }

    #[test]
    fn test_frame_constants() {
        assert_eq!(MAVLINK_STX_V1, 0xFE);
        assert_eq!(MAVLINK_STX_V2, 0xFD);
        assert_eq!(MSG_ID_GLOBAL_POSITION_INT, 33);
        assert_eq!(GLOBAL_POSITION_INT_PAYLOAD_SIZE, 28);
    }

    #[test]
    fn test_from_state_scaling() {
        let msg = GlobalPositionInt::from_state(&state(1.5, -2.25, 40.0, 500), HEADING_CENTIDEG);

        assert_eq!(msg.time_boot_ms, 500);
        assert_eq!(msg.lat, 15_000_000);
        assert_eq!(msg.lon, -22_500_000);
        assert_eq!(msg.alt, 40_000);
        assert_eq!(msg.relative_alt, 40_000);
        assert_eq!(msg.hdg, 4500);
    }

    #[test]
    fn test_from_state_truncates_toward_zero() {
        // 1e-8 degrees is below the 1e-7 quantum and must truncate to zero,
        // for positive and negative values alike
        let msg = GlobalPositionInt::from_state(&state(0.000000009, -0.000000009, 0.0004, 0), 0);

        assert_eq!(msg.lat, 0);
        assert_eq!(msg.lon, 0);
        assert_eq!(msg.alt, 0);
    }

    #[test]
    fn test_from_state_velocities_zero() {
        let msg = GlobalPositionInt::from_state(&state(-35.0, 149.0, 40.0, 100), HEADING_CENTIDEG);

        assert_eq!(msg.vx, 0);
        assert_eq!(msg.vy, 0);
        assert_eq!(msg.vz, 0);
    }

    #[test]
    fn test_round_trip_scaling_within_quantization() {
        let lat = -35.363261;
        let lon = 149.165230;
        let alt = 40.123456;

        let msg = GlobalPositionInt::from_state(&state(lat, lon, alt, 0), HEADING_CENTIDEG);

        assert!((msg.lat as f64 / 1e7 - lat).abs() <= 0.5e-7);
        assert!((msg.lon as f64 / 1e7 - lon).abs() <= 0.5e-7);
        assert!((msg.alt as f64 / 1e3 - alt).abs() <= 0.5e-3);
    }

    #[test]
    fn test_payload_layout() {
        let msg = GlobalPositionInt {
            time_boot_ms: 0x0403_0201,
            lat: -1,
            lon: 2,
            alt: 3,
            relative_alt: 3,
            vx: 0,
            vy: 0,
            vz: 0,
            hdg: 4500,
        };

        let payload = msg.payload();
        assert_eq!(payload.len(), GLOBAL_POSITION_INT_PAYLOAD_SIZE);

        assert_eq!(&payload[0..4], &[0x01, 0x02, 0x03, 0x04]); // time_boot_ms LE
        assert_eq!(&payload[4..8], &[0xFF, 0xFF, 0xFF, 0xFF]); // lat = -1
        assert_eq!(&payload[8..12], &[0x02, 0x00, 0x00, 0x00]); // lon
        assert_eq!(&payload[26..28], &4500u16.to_le_bytes()); // hdg last
    }

    #[test]
    fn test_wire_version_parse() {
        assert_eq!(WireVersion::parse("0").unwrap(), WireVersion::V1);
        assert_eq!(WireVersion::parse("1").unwrap(), WireVersion::V2);
        assert!(WireVersion::parse("2").is_err());
        assert!(WireVersion::parse("yes").is_err());
    }
}
