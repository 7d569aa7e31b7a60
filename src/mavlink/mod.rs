//! # MAVLink Protocol Module
//!
//! Minimal MAVLink implementation covering the one message this generator
//! emits.
//!
//! This module handles:
//! - GLOBAL_POSITION_INT (#33) message construction and payload packing
//! - MAVLink 1 (0xFE) and MAVLink 2 (0xFD) frame encoding
//! - X.25 checksum calculation with per-message CRC_EXTRA

pub mod crc;
pub mod encoder;
pub mod protocol;
