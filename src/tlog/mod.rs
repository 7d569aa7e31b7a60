//! # Tlog Writer Module
//!
//! Appends encoded MAVLink frames to a `.tlog` file.
//!
//! The `.tlog` container is a flat concatenation of frames with no header,
//! footer, or frame count: each on-disk record is an 8-byte big-endian
//! capture timestamp (microseconds since the Unix epoch) immediately
//! followed by one MAVLink frame. Consumers read until end-of-file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use tracing::debug;

use crate::error::Result;

/// Buffered `.tlog` file writer
///
/// Exclusively owns the output handle for the duration of the run. The file
/// is created truncated-empty, so a failed run never leaves an ambiguous
/// partial file behind a stale one.
#[derive(Debug)]
pub struct TlogWriter {
    out: BufWriter<File>,
    frames_written: u64,
}

impl TlogWriter {
    /// Create (or truncate) the output file at `path`
    ///
    /// # Errors
    ///
    /// Returns error if the path cannot be created or opened for writing
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        debug!("created tlog output at {}", path.as_ref().display());

        Ok(Self {
            out: BufWriter::new(file),
            frames_written: 0,
        })
    }

    /// Append one timestamped frame
    ///
    /// # Arguments
    ///
    /// * `timestamp_us` - Capture timestamp, microseconds since the Unix epoch
    /// * `frame` - Complete encoded MAVLink frame
    ///
    /// # Errors
    ///
    /// Returns error if the underlying write fails
    pub fn append(&mut self, timestamp_us: u64, frame: &[u8]) -> Result<()> {
        self.out.write_all(&timestamp_us.to_be_bytes())?;
        self.out.write_all(frame)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Number of frames appended so far
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Flush buffered data and release the file handle
    ///
    /// # Errors
    ///
    /// Returns error if flushing buffered data fails
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Current wall-clock time in microseconds since the Unix epoch
pub fn wall_clock_micros() -> u64 {
    Utc::now().timestamp_micros() as u64
}
