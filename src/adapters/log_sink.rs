//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! A future display or MQTT adapter would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Cycle(c) => {
                info!(
                    "CYCLE | T={:.2}\u{00b0}C | turbidity={:.2}NTU | level={:.2}cm | pump={}",
                    c.snapshot.temperature.raw(),
                    c.snapshot.turbidity.raw(),
                    c.snapshot.level_cm.raw(),
                    if c.pump_on { "ON" } else { "OFF" },
                );
            }
            AppEvent::PumpChanged { on } => {
                if *on {
                    info!("PUMP  | water level low, turning pump ON");
                } else {
                    info!("PUMP  | water level sufficient, pump OFF");
                }
            }
            AppEvent::Published { sent } => {
                info!("TELEM | publish window fired, {} reading(s) forwarded", sent);
            }
            AppEvent::Started => {
                info!("START | control loop running");
            }
        }
    }
}
