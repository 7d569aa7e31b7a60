//! # MAVLink Frame Encoder
//!
//! Encodes GLOBAL_POSITION_INT messages into complete standalone MAVLink
//! frames in either wire-format major version.

use bytes::{BufMut, BytesMut};

use super::crc::{crc_accumulate, crc_calculate};
use super::protocol::*;

/// Stateful frame encoder
///
/// Holds the wire version and the frame sequence counter; everything else
/// about encoding is a pure function of the message.
#[derive(Debug)]
pub struct Encoder {
    version: WireVersion,
    seq: u8,
}

impl Encoder {
    /// Create an encoder for the given wire version, starting at sequence 0
    pub fn new(version: WireVersion) -> Self {
        Self { version, seq: 0 }
    }

    /// Wire version this encoder produces
    pub fn version(&self) -> WireVersion {
        self.version
    }

    /// Encode one message into a complete MAVLink frame
    ///
    /// The sequence counter advances modulo 256 per encoded frame.
    ///
    /// # Arguments
    ///
    /// * `msg` - Message to encode
    ///
    /// # Returns
    ///
    /// * `Vec<u8>` - Complete frame: header + payload + 2-byte checksum
    pub fn encode(&mut self, msg: &GlobalPositionInt) -> Vec<u8> {
        let payload = msg.payload();

        let frame = match self.version {
            WireVersion::V1 => self.encode_v1(&payload),
            WireVersion::V2 => self.encode_v2(&payload),
        };

        self.seq = self.seq.wrapping_add(1);
        frame
    }

    /// Build a legacy 0xFE frame: fixed-length payload, 8-bit message id
    fn encode_v1(&self, payload: &[u8]) -> Vec<u8> {
        let mut frame = BytesMut::with_capacity(8 + payload.len());
        frame.put_u8(MAVLINK_STX_V1);
        frame.put_u8(payload.len() as u8);
        frame.put_u8(self.seq);
        frame.put_u8(SYSTEM_ID);
        frame.put_u8(COMPONENT_ID);
        frame.put_u8(MSG_ID_GLOBAL_POSITION_INT as u8);
        frame.put_slice(payload);

        let crc = frame_checksum(&frame[1..]);
        frame.put_u16_le(crc);

        frame.to_vec()
    }

    /// Build an extended 0xFD frame: 24-bit message id, trailing zero bytes
    /// of the payload truncated (minimum payload length 1)
    fn encode_v2(&self, payload: &[u8]) -> Vec<u8> {
        let mut len = payload.len();
        while len > 1 && payload[len - 1] == 0 {
            len -= 1;
        }
        let payload = &payload[..len];

        let mut frame = BytesMut::with_capacity(12 + len);
        frame.put_u8(MAVLINK_STX_V2);
        frame.put_u8(len as u8);
        frame.put_u8(0); // incompat_flags
        frame.put_u8(0); // compat_flags
        frame.put_u8(self.seq);
        frame.put_u8(SYSTEM_ID);
        frame.put_u8(COMPONENT_ID);
        frame.put_u8((MSG_ID_GLOBAL_POSITION_INT & 0xFF) as u8);
        frame.put_u8(((MSG_ID_GLOBAL_POSITION_INT >> 8) & 0xFF) as u8);
        frame.put_u8(((MSG_ID_GLOBAL_POSITION_INT >> 16) & 0xFF) as u8);
        frame.put_slice(payload);

        let crc = frame_checksum(&frame[1..]);
        frame.put_u16_le(crc);

        frame.to_vec()
    }
}

/// Frame checksum: X.25 over everything after the start byte, then the
/// message's CRC_EXTRA byte
fn frame_checksum(bytes: &[u8]) -> u16 {
    crc_accumulate(GLOBAL_POSITION_INT_CRC_EXTRA, crc_calculate(bytes))
}
