//! Typed errors for the sensor acquisition path.
//!
//! A failed sensor read is never fatal — drivers map these into the INVALID
//! reading sentinel at the sensor boundary — but the 1-Wire bus layer keeps
//! them typed so the log line says *why* a probe dropped out.  All variants
//! are `Copy` so they pass through the acquisition path without allocation.

use core::fmt;

/// Errors raised below the sensor boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// No device answered the 1-Wire reset pulse (probe unplugged or
    /// bus shorted).
    NoPresence,
    /// Scratchpad read failed its CRC check (noise on the bus).
    CrcMismatch,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPresence => write!(f, "no presence pulse on 1-Wire bus"),
            Self::CrcMismatch => write!(f, "scratchpad CRC mismatch"),
        }
    }
}
