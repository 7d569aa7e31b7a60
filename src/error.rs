//! # Error Types
//!
//! Custom error types for tlog-gen using `thiserror`.

use thiserror::Error;

/// Main error type for tlog-gen
#[derive(Debug, Error)]
pub enum TlogGenError {
    /// MAVLink protocol errors
    #[error("MAVLink protocol error: {0}")]
    MavlinkProtocol(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tlog-gen
pub type Result<T> = std::result::Result<T, TlogGenError>;
