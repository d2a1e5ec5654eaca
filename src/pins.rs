//! GPIO / peripheral pin assignments for the AquaMon reservoir board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Pump relay
// ---------------------------------------------------------------------------

/// Digital output driving the pump relay coil (active HIGH).
/// Initialized LOW at boot so the pump never runs before the first policy
/// decision.
pub const PUMP_RELAY_GPIO: i32 = 25;

// ---------------------------------------------------------------------------
// Sensors — 1-Wire
// ---------------------------------------------------------------------------

/// DS18B20 water temperature probe — 1-Wire data line with external 4.7 kΩ
/// pull-up.  Driven open-drain by the bit-banged bus in `drivers::onewire`.
pub const WATER_TEMP_ONEWIRE_GPIO: i32 = 33;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Turbidity sensor analog output — voltage proportional to suspended
/// solids.  ADC1 channel 6 (GPIO 34 on ESP32, input-only pin).
pub const TURBIDITY_ADC_GPIO: i32 = 34;

// ---------------------------------------------------------------------------
// Sensors — Ultrasonic (HC-SR04)
// ---------------------------------------------------------------------------

/// Trigger output: a 10 µs HIGH pulse starts a ranging cycle.
pub const ULTRASONIC_TRIG_GPIO: i32 = 26;
/// Echo input: pulse width encodes the round-trip time to the water surface.
pub const ULTRASONIC_ECHO_GPIO: i32 = 27;
