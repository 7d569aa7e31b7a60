//! # Simulation Module
//!
//! Kinematic simulation of the vehicle along scripted trajectory segments.
//!
//! This module handles:
//! - The mutable vehicle state (position, altitude, boot time)
//! - Linear interpolation toward a segment target at a fixed sample rate

pub mod integrator;
pub mod state;

pub use integrator::{advance, Segment};
pub use state::VehicleState;
