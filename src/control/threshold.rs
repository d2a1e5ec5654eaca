//! Level threshold policy for the top-up pump.
//!
//! The ultrasonic sensor measures the distance from its mounting point down
//! to the water surface, so a larger distance means lower water.  The policy
//! is a memoryless single-sample threshold: no hysteresis band, no debounce.
//! A level that oscillates at exactly the threshold will chatter the relay
//! on consecutive cycles — accepted behavior for this hardware.

use crate::sensors::Reading;

/// Binary pump relay command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpCommand {
    On,
    Off,
}

impl PumpCommand {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Threshold policy over the water level reading.
pub struct ThresholdPolicy {
    threshold_cm: f32,
}

impl ThresholdPolicy {
    pub fn new(threshold_cm: f32) -> Self {
        Self { threshold_cm }
    }

    /// Decide the pump command from the latest level reading.
    ///
    /// An invalid reading always commands Off — never run the pump on
    /// unknown level data.  Otherwise On iff the surface is strictly
    /// farther than the threshold (water low); equality is Off.
    pub fn decide(&self, level: Reading) -> PumpCommand {
        match level.value() {
            Some(distance_cm) if distance_cm > self.threshold_cm => PumpCommand::On,
            _ => PumpCommand::Off,
        }
    }
}
