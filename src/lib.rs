//! # tlog-gen Library
//!
//! Synthesize MAVLink `.tlog` mission logs for exercising flight-log analyzers.
//!
//! This library simulates an aerial vehicle flying scripted trajectory segments
//! (a clean square loop, an altitude-violation loop, and a no-fly-zone-violation
//! loop) and records the flight as a stream of GLOBAL_POSITION_INT messages in
//! the standard `.tlog` container format.

pub mod error;
pub mod mavlink;
pub mod scenario;
pub mod sim;
pub mod tlog;
