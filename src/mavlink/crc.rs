//! # X.25 Checksum Implementation
//!
//! CRC-16/MCRF4XX (the X.25 variant without output inversion) as used by the
//! MAVLink frame checksum.
//!
//! **Polynomial**: 0x1021 reflected (0x8408)
//! **Initial Value**: 0xFFFF

/// X.25 CRC initial value
pub const X25_INIT_CRC: u16 = 0xFFFF;

/// Accumulate one byte into a running X.25 CRC
///
/// This is the bytewise update formula from the MAVLink reference
/// implementation (`crc_accumulate` in `checksum.h`).
///
/// # Arguments
///
/// * `byte` - Next data byte
/// * `crc` - Running CRC value
///
/// # Returns
///
/// * `u16` - Updated CRC value
pub fn crc_accumulate(byte: u8, crc: u16) -> u16 {
    let mut tmp = byte ^ (crc & 0xFF) as u8;
    tmp ^= tmp << 4;
    (crc >> 8) ^ ((tmp as u16) << 8) ^ ((tmp as u16) << 3) ^ ((tmp as u16) >> 4)
}

/// Calculate the X.25 CRC of a byte slice
///
/// Note that the MAVLink frame checksum additionally folds in the message's
/// CRC_EXTRA byte after the frame bytes; that is the caller's responsibility.
///
/// # Arguments
///
/// * `data` - Byte slice to checksum
///
/// # Returns
///
/// * `u16` - Calculated CRC value
pub fn crc_calculate(data: &[u8]) -> u16 {
    data.iter().fold(X25_INIT_CRC, |crc, &byte| crc_accumulate(byte, crc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc_empty() {
        assert_eq!(crc_calculate(&[]), X25_INIT_CRC);
    }

    #[test]
    fn test_crc_check_value() {
        // Standard CRC-16/MCRF4XX check value
        assert_eq!(crc_calculate(b"123456789"), 0x6F91);
    }

    #[test]
    fn test_crc_accumulate_matches_calculate() {
        let data = [0x1C, 0x21, 0x00, 0x01, 0x01, 0xFF];

        let mut crc = X25_INIT_CRC;
        for &byte in &data {
            crc = crc_accumulate(byte, crc);
        }

        assert_eq!(crc, crc_calculate(&data));
    }

    #[test]
    fn test_crc_changes_with_data() {
        let crc1 = crc_calculate(&[0x1C, 0x21, 0x00]);
        let crc2 = crc_calculate(&[0x1C, 0x21, 0x01]);

        assert_ne!(crc1, crc2, "CRC should change when data changes");
    }

    #[test]
    fn test_crc_order_sensitive() {
        let crc1 = crc_calculate(&[0x01, 0x02]);
        let crc2 = crc_calculate(&[0x02, 0x01]);

        assert_ne!(crc1, crc2);
    }
}
