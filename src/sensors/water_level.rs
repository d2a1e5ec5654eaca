//! HC-SR04 ultrasonic water level sensor.
//!
//! Mounted above the reservoir, it measures the distance down to the water
//! surface: a larger distance means less water.  A ranging cycle is a 10 µs
//! trigger pulse followed by an echo pulse whose width encodes the
//! round-trip time.  The echo wait is hard-bounded by the configured
//! timeout — this is the dominant latency in a control cycle and must never
//! become unbounded on a disconnected echo line.
//!
//! A timed-out measurement yields a zero-width pulse, which converts to a
//! numeric 0.0 cm rather than an invalid reading — the transducer cannot
//! distinguish "no echo" from "surface at the sensor face".  The threshold
//! policy consequently reads a timeout as "water high"; see the tests
//! pinning this behavior.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives trigger/echo GPIOs via hw_init helpers.
//! On host/test: reads the pulse width from a static AtomicU32 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;
use crate::sensors::Reading;

/// One-way cm per microsecond of round-trip echo: speed of sound (343 m/s)
/// expressed as 0.034 cm/µs, halved in the conversion.
const SPEED_OF_SOUND_CM_PER_US: f32 = 0.034;

#[cfg(not(target_os = "espidf"))]
static SIM_ECHO_US: AtomicU32 = AtomicU32::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_echo_us(duration: u32) {
    SIM_ECHO_US.store(duration, Ordering::Relaxed);
}

/// Convert a round-trip echo duration to one-way distance in cm.
///
/// Always numeric: a zero/timed-out duration converts to 0.0 cm, and a
/// duration at the timeout bound converts to the corresponding maximum
/// range — never to an invalid reading.
pub fn distance_cm_from_echo(duration_us: u32, timeout_us: u32) -> Reading {
    let bounded = duration_us.min(timeout_us);
    Reading::valid(bounded as f32 * SPEED_OF_SOUND_CM_PER_US / 2.0)
}

pub struct UltrasonicSensor {
    timeout_us: u32,
}

impl UltrasonicSensor {
    pub fn new(timeout_us: u32) -> Self {
        Self { timeout_us }
    }

    /// One ranging cycle: trigger, bounded echo wait, conversion.
    pub fn read(&mut self) -> Reading {
        let duration = self.measure_echo_us();
        distance_cm_from_echo(duration, self.timeout_us)
    }

    #[cfg(target_os = "espidf")]
    fn measure_echo_us(&self) -> u32 {
        hw_init::gpio_write(pins::ULTRASONIC_TRIG_GPIO, false);
        hw_init::delay_us(2);
        hw_init::gpio_write(pins::ULTRASONIC_TRIG_GPIO, true);
        hw_init::delay_us(10);
        hw_init::gpio_write(pins::ULTRASONIC_TRIG_GPIO, false);
        hw_init::pulse_in_us(pins::ULTRASONIC_ECHO_GPIO, true, self.timeout_us)
    }

    #[cfg(not(target_os = "espidf"))]
    fn measure_echo_us(&self) -> u32 {
        SIM_ECHO_US.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_duration_halves_to_one_way_distance() {
        // 882 µs round trip ≈ 15 cm one way.
        let r = distance_cm_from_echo(882, 30_000);
        let cm = r.value().unwrap();
        assert!((cm - 14.994).abs() < 0.01, "got {cm}");
    }

    #[test]
    fn timeout_yields_numeric_zero_not_invalid() {
        let r = distance_cm_from_echo(0, 30_000);
        assert!(r.is_valid(), "timed-out echo must stay numeric");
        assert_eq!(r.value(), Some(0.0));
    }

    #[test]
    fn duration_saturates_at_timeout_bound() {
        let r = distance_cm_from_echo(u32::MAX, 30_000);
        let max_cm = 30_000.0 * SPEED_OF_SOUND_CM_PER_US / 2.0;
        assert_eq!(r.value(), Some(max_cm));
    }

    #[test]
    fn sensor_reads_injected_pulse_width() {
        sim_set_echo_us(882);
        let mut sensor = UltrasonicSensor::new(30_000);
        let cm = sensor.read().value().unwrap();
        assert!((cm - 14.994).abs() < 0.01, "got {cm}");
    }
}
