//! Log-based telemetry sink adapter.
//!
//! Implements [`TelemetrySink`] by logging each path-addressed write.
//! This is where the remote time-series client plugs in: the session
//! lifecycle, authentication, and delivery callbacks of the real uplink
//! live in an external collaborator that implements the same trait.  The
//! contract either way is fire-and-forget — `write` returns immediately,
//! and a delivery failure is observed (and logged) asynchronously without
//! ever reaching the publication scheduler.

use log::info;

use crate::app::ports::TelemetrySink;

/// Adapter that logs every telemetry write to the serial console.
pub struct LogTelemetrySink;

impl LogTelemetrySink {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for LogTelemetrySink {
    fn write(&mut self, path: &'static str, value: f32) {
        info!("SINK  | {} <- {:.2}", path, value);
    }
}
