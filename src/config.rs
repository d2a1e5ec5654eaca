//! System configuration parameters
//!
//! All tunable parameters for the AquaMon system.  Values are static for the
//! process lifetime; provisioning and persistence are handled by an external
//! collaborator, so the firmware only ever constructs them here.

use serde::{Deserialize, Serialize};

/// Turbidity sensor calibration: `NTU = a·V² + b·V + c`.
///
/// The defaults are the manufacturer curve for the stock optical sensor;
/// replace after a formazin calibration run on the actual unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurbidityCalibration {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Default for TurbidityCalibration {
    fn default() -> Self {
        Self {
            a: -1120.4,
            b: 5742.3,
            c: -4352.9,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Pump policy ---
    /// Sensor-to-surface distance (cm) above which the pump turns on.
    /// The ultrasonic sensor measures down to the water, so a larger
    /// distance means less water.
    pub level_threshold_cm: f32,

    // --- ADC ---
    /// ADC reference voltage (V).
    pub adc_vref: f32,
    /// Full-scale ADC count (12-bit → 4095).
    pub adc_max_count: u16,

    // --- Turbidity ---
    /// Quadratic voltage→NTU calibration.
    pub turbidity_cal: TurbidityCalibration,

    // --- Water level ---
    /// Maximum time to wait for the ultrasonic echo edge (µs).
    /// 30 ms bounds the measurable range at roughly 5 m.
    pub echo_timeout_us: u32,

    // --- Timing ---
    /// Minimum interval between telemetry forwards (seconds).
    pub publish_interval_secs: u32,
    /// Fixed delay at the end of each control cycle (milliseconds).
    pub loop_delay_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Pump policy
            level_threshold_cm: 10.0,

            // ADC
            adc_vref: 3.3,
            adc_max_count: 4095,

            // Turbidity
            turbidity_cal: TurbidityCalibration::default(),

            // Water level
            echo_timeout_us: 30_000,

            // Timing
            publish_interval_secs: 10,
            loop_delay_ms: 2000,
        }
    }
}
