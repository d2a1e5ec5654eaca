//! Query interface contract.
//!
//! The local query server (transport and routing owned by an external
//! collaborator) serves two things: a fixed plaintext liveness string at
//! the root, and the latest snapshot as JSON.  This module owns the JSON
//! shape so the contract is testable without the server.
//!
//! An invalid reading serializes as `null` — its in-memory NaN sentinel
//! is not representable in JSON.

use serde::Serialize;

use crate::sensors::SensorSnapshot;

/// Fixed plaintext body for the root status endpoint.
pub const LIVENESS_TEXT: &str = "ESP32 is running";

/// JSON view of the latest snapshot: exactly three fields, one per
/// monitored quantity, `null` when the reading is invalid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusReport {
    temperature: Option<f32>,
    turbidity: Option<f32>,
    water_level_cm: Option<f32>,
}

impl StatusReport {
    pub fn from_snapshot(snapshot: &SensorSnapshot) -> Self {
        Self {
            temperature: snapshot.temperature.value(),
            turbidity: snapshot.turbidity.value(),
            water_level_cm: snapshot.level_cm.value(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::Reading;

    #[test]
    fn all_valid_snapshot_serializes_numbers() {
        let snapshot = SensorSnapshot {
            temperature: Reading::valid(21.5),
            turbidity: Reading::valid(3.0),
            level_cm: Reading::valid(15.0),
        };
        let json = StatusReport::from_snapshot(&snapshot).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"temperature":21.5,"turbidity":3.0,"water_level_cm":15.0}"#
        );
    }

    #[test]
    fn invalid_reading_serializes_as_null() {
        let snapshot = SensorSnapshot {
            temperature: Reading::invalid(),
            turbidity: Reading::valid(3.0),
            level_cm: Reading::valid(15.0),
        };
        let json = StatusReport::from_snapshot(&snapshot).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"temperature":null,"turbidity":3.0,"water_level_cm":15.0}"#
        );
    }

    #[test]
    fn boot_snapshot_is_all_null() {
        let json = StatusReport::from_snapshot(&SensorSnapshot::default())
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            r#"{"temperature":null,"turbidity":null,"water_level_cm":null}"#
        );
    }
}
