//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every transducer driver and produces a [`SensorSnapshot`]
//! each control cycle.  Conversion from raw transducer signal to physical
//! units lives with each driver as pure functions, so the math is testable
//! without hardware.

pub mod temperature;
pub mod turbidity;
pub mod water_level;

use temperature::TemperatureSensor;
use turbidity::TurbiditySensor;
use water_level::UltrasonicSensor;

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// A converted, physical-unit sensor value with a validity flag.
///
/// An invalid reading carries `f32::NAN`, never zero — a disconnected probe
/// must not masquerade as a freezing tank or an empty reservoir.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading(f32);

impl Reading {
    /// A valid physical-unit measurement.
    pub fn valid(value: f32) -> Self {
        Self(value)
    }

    /// The not-a-number sentinel for a disconnected or faulted transducer.
    pub fn invalid() -> Self {
        Self(f32::NAN)
    }

    pub fn is_valid(self) -> bool {
        !self.0.is_nan()
    }

    /// The measurement, or `None` when invalid.
    pub fn value(self) -> Option<f32> {
        if self.is_valid() { Some(self.0) } else { None }
    }

    /// The raw inner value, NaN-preserving.  For log formatting only —
    /// decision logic goes through [`Reading::value`].
    pub fn raw(self) -> f32 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The most recent reading for each monitored quantity.
///
/// A single-slot cache, overwritten in place once per control cycle by its
/// sole writer (the control service).  Collaborators get `&`-access only.
#[derive(Debug, Clone, Copy)]
pub struct SensorSnapshot {
    /// Water temperature (°C).
    pub temperature: Reading,
    /// Turbidity (NTU).
    pub turbidity: Reading,
    /// Distance from the sensor down to the water surface (cm).
    /// Larger means less water.
    pub level_cm: Reading,
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self {
            temperature: Reading::invalid(),
            turbidity: Reading::invalid(),
            level_cm: Reading::invalid(),
        }
    }
}

// ---------------------------------------------------------------------------
// SensorHub
// ---------------------------------------------------------------------------

/// Aggregates all transducer drivers and produces a unified snapshot.
pub struct SensorHub {
    pub temperature: TemperatureSensor,
    pub turbidity: TurbiditySensor,
    pub level: UltrasonicSensor,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(
        temperature: TemperatureSensor,
        turbidity: TurbiditySensor,
        level: UltrasonicSensor,
    ) -> Self {
        Self {
            temperature,
            turbidity,
            level,
        }
    }

    /// Take exactly one measurement per transducer and return the snapshot.
    ///
    /// Fixed order: temperature, turbidity, level.  The level measurement
    /// blocks for up to the configured echo timeout; everything else is
    /// microseconds.  An invalid reading never aborts the cycle — it flows
    /// through as the NaN sentinel for downstream stages to skip.
    pub fn acquire_all(&mut self) -> SensorSnapshot {
        let temperature = self.temperature.read();
        let turbidity = self.turbidity.read();
        let level_cm = self.level.read();

        SensorSnapshot {
            temperature,
            turbidity,
            level_cm,
        }
    }
}
