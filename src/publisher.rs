//! Telemetry publication scheduler.
//!
//! Rate-limits forwarding of readings to the remote time-series sink,
//! independent of the control loop cadence.  The scheduler owns a single
//! piece of state — the monotonic timestamp of the last window fire —
//! and never blocks, waits, or retries: writes are handed to the
//! [`TelemetrySink`](crate::app::ports::TelemetrySink) port fire-and-forget.
//!
//! Only temperature and turbidity are eligible for forwarding.  The water
//! level is deliberately never sent to the remote store — the exclusion is
//! a policy rule, enforced here by the function signature, not an
//! oversight.

use heapless::Vec;

use crate::app::ports::TelemetrySink;
use crate::sensors::Reading;

/// Remote path for temperature forwards.
pub const TEMPERATURE_PATH: &str = "sensor/temperature";
/// Remote path for turbidity forwards.
pub const TURBIDITY_PATH: &str = "sensor/turbidity";

/// What a call to [`Publisher::maybe_publish`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Inside the rate-limit window; nothing was forwarded.
    Skipped,
    /// The window fired.  `paths` lists what was actually forwarded —
    /// zero, one, or two entries depending on per-reading validity.
    Published { paths: Vec<&'static str, 2> },
}

/// Rate-limited, selective forwarder.
pub struct Publisher {
    interval_us: u64,
    /// Monotonic timestamp of the last window fire.  `None` = never
    /// published; the first eligible call fires immediately.
    last_publish_us: Option<u64>,
}

impl Publisher {
    pub fn new(interval_secs: u32) -> Self {
        Self {
            interval_us: u64::from(interval_secs) * 1_000_000,
            last_publish_us: None,
        }
    }

    /// Forward eligible readings if the publish window has elapsed.
    ///
    /// When the window fires, the timestamp advances unconditionally —
    /// before validity gating — so a persistently faulted sensor cannot
    /// tighten the attempt rate below the interval.  Each reading is then
    /// gated independently: an invalid temperature never suppresses a
    /// valid turbidity forward, and vice versa.
    pub fn maybe_publish(
        &mut self,
        now_us: u64,
        temperature: Reading,
        turbidity: Reading,
        sink: &mut impl TelemetrySink,
    ) -> PublishOutcome {
        if let Some(last) = self.last_publish_us {
            if now_us.saturating_sub(last) < self.interval_us {
                return PublishOutcome::Skipped;
            }
        }
        self.last_publish_us = Some(now_us);

        let mut paths = Vec::new();
        if let Some(celsius) = temperature.value() {
            sink.write(TEMPERATURE_PATH, celsius);
            let _ = paths.push(TEMPERATURE_PATH);
        }
        if let Some(ntu) = turbidity.value() {
            sink.write(TURBIDITY_PATH, ntu);
            let _ = paths.push(TURBIDITY_PATH);
        }
        PublishOutcome::Published { paths }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
