//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlService (domain)
//! ```
//!
//! Driven adapters (sensors, the pump relay, the telemetry uplink, event
//! sinks) implement these traits.  The
//! [`ControlService`](super::service::ControlService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::sensors::SensorSnapshot;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor data.
pub trait SensorPort {
    /// Take one measurement per transducer and return a unified snapshot.
    fn acquire_all(&mut self) -> SensorSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the pump relay.
pub trait ActuatorPort {
    /// Drive the pump relay line (true = run).
    fn set_pump(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Telemetry sink port (driven adapter: domain → remote store)
// ───────────────────────────────────────────────────────────────

/// Path-addressed scalar writes to the remote time-series store.
///
/// Fire-and-forget: implementations must return without waiting for the
/// remote outcome.  Delivery results are observed inside the adapter
/// (logged, surfaced asynchronously) and never fed back into the caller —
/// the publication scheduler's timing is independent of delivery success.
pub trait TelemetrySink {
    fn write(&mut self, path: &'static str, value: f32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / diagnostics)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, a future
/// local display, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
