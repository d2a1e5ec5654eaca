//! Property tests for the unit converters, policy, and publish window.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32 targets.
//! On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use aquamon::app::ports::TelemetrySink;
use aquamon::config::TurbidityCalibration;
use aquamon::control::threshold::{PumpCommand, ThresholdPolicy};
use aquamon::publisher::{PublishOutcome, Publisher};
use aquamon::sensors::temperature::{celsius_from_device, DISCONNECTED_C, POWER_ON_RESET_C};
use aquamon::sensors::turbidity::ntu_from_adc;
use aquamon::sensors::water_level::distance_cm_from_echo;
use aquamon::sensors::Reading;
use proptest::prelude::*;

struct NullSink;

impl TelemetrySink for NullSink {
    fn write(&mut self, _path: &'static str, _value: f32) {}
}

proptest! {
    /// Over the full ADC domain, turbidity is non-negative and never invalid.
    #[test]
    fn turbidity_is_total_and_non_negative(count in 0u16..=4095u16) {
        let r = ntu_from_adc(count, 3.3, 4095, &TurbidityCalibration::default());
        prop_assert!(r.is_valid(), "turbidity must never report invalid");
        prop_assert!(r.value().unwrap() >= 0.0, "NTU has no negative values");
    }

    /// Off the two sentinels, the temperature converter is the identity.
    #[test]
    fn temperature_is_identity_off_sentinels(celsius in -55.0f32..125.0f32) {
        prop_assume!(celsius != DISCONNECTED_C && celsius != POWER_ON_RESET_C);
        prop_assert_eq!(celsius_from_device(celsius).value(), Some(celsius));
    }

    /// The echo converter is total: any duration/timeout pair yields a
    /// numeric, non-negative distance — timeouts included.
    #[test]
    fn echo_conversion_is_total(duration in proptest::num::u32::ANY, timeout in 1u32..=60_000u32) {
        let r = distance_cm_from_echo(duration, timeout);
        prop_assert!(r.is_valid());
        prop_assert!(r.value().unwrap() >= 0.0);
    }

    /// The policy is a pure function of the reading: strictly above the
    /// threshold is On, everything else (including equality) is Off.
    #[test]
    fn policy_matches_strict_threshold(distance in 0.0f32..500.0f32, threshold in 1.0f32..100.0f32) {
        let policy = ThresholdPolicy::new(threshold);
        let expected = if distance > threshold {
            PumpCommand::On
        } else {
            PumpCommand::Off
        };
        prop_assert_eq!(policy.decide(Reading::valid(distance)), expected);
        // Repeatable — no hidden state.
        prop_assert_eq!(policy.decide(Reading::valid(distance)), expected);
    }

    /// For any monotone call sequence, consecutive fires are separated by
    /// at least the interval.
    #[test]
    fn publish_fires_never_tighten_below_interval(
        deltas in proptest::collection::vec(0u64..=30_000_000u64, 1..=40),
    ) {
        let mut publisher = Publisher::new(10);
        let mut sink = NullSink;
        let mut now = 0u64;
        let mut last_fire: Option<u64> = None;

        for delta in deltas {
            now += delta;
            let outcome = publisher.maybe_publish(
                now,
                Reading::valid(20.0),
                Reading::valid(2.0),
                &mut sink,
            );
            if matches!(outcome, PublishOutcome::Published { .. }) {
                if let Some(prev) = last_fire {
                    prop_assert!(
                        now - prev >= 10_000_000,
                        "fired {}µs after the previous fire",
                        now - prev
                    );
                }
                last_fire = Some(now);
            }
        }
    }
}
