//! Top-up pump relay driver.
//!
//! A single digital line drives the relay coil: HIGH = pump running,
//! LOW = pump off.  `hw_init` leaves the line LOW before the control loop
//! starts, so the relay state below is accurate from the first cycle.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct PumpRelay {
    on: bool,
}

impl PumpRelay {
    pub fn new() -> Self {
        Self { on: false }
    }

    /// Drive the relay line.  Idempotent — the line is re-asserted every
    /// control cycle, not just on state changes.
    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::PUMP_RELAY_GPIO, on);
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
