//! Outbound application events.
//!
//! The [`ControlService`](super::service::ControlService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — log to serial, drive a
//! status display, etc.

use crate::sensors::SensorSnapshot;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The control service has started.
    Started,

    /// One control cycle completed (carries the fresh readings).
    Cycle(CycleData),

    /// The pump relay changed state.
    PumpChanged { on: bool },

    /// A publish window fired; `sent` counts the readings forwarded
    /// (0–2 depending on per-reading validity).
    Published { sent: usize },
}

/// Per-cycle data suitable for logging or a local display.
#[derive(Debug, Clone, Copy)]
pub struct CycleData {
    pub snapshot: SensorSnapshot,
    pub pump_on: bool,
}
