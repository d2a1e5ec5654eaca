//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements    | Connects to                        |
//! |-------------|---------------|------------------------------------|
//! | `hardware`  | SensorPort    | DS18B20, ADC, HC-SR04              |
//! |             | ActuatorPort  | Pump relay GPIO                    |
//! | `log_sink`  | EventSink     | Serial log output                  |
//! | `telemetry` | TelemetrySink | Serial log (remote-store stand-in) |
//! | `time`      | —             | ESP32 system timer                 |
//! | `query`     | —             | Snapshot JSON contract             |

pub mod hardware;
pub mod log_sink;
pub mod query;
pub mod telemetry;
pub mod time;
