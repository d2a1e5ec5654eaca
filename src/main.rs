//! AquaMon Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter      LogEventSink      LogTelemetrySink       │
//! │  (Sensor+Actuator)    (EventSink)       (TelemetrySink)        │
//! │  Esp32TimeAdapter     query::StatusReport                      │
//! │  (monotonic clock)    (snapshot JSON contract)                 │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │             ControlService (pure logic)                │    │
//! │  │  threshold policy · snapshot · publish scheduler       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
pub mod error;
mod pins;

pub mod adapters;
pub mod app;
pub mod control;
pub mod drivers;
pub mod publisher;
pub mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::telemetry::LogTelemetrySink;
use adapters::time::Esp32TimeAdapter;
use app::service::ControlService;
use config::SystemConfig;
use drivers::pump::PumpRelay;
use sensors::temperature::TemperatureSensor;
use sensors::turbidity::TurbiditySensor;
use sensors::water_level::UltrasonicSensor;
use sensors::SensorHub;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  AquaMon v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    // Static for the process lifetime — the provisioning collaborator
    // owns loading and persistence.
    let config = SystemConfig::default();

    // ── 3. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 4. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        TemperatureSensor::new(pins::WATER_TEMP_ONEWIRE_GPIO),
        TurbiditySensor::new(config.adc_vref, config.adc_max_count, config.turbidity_cal),
        UltrasonicSensor::new(config.echo_timeout_us),
    );
    let mut hw = HardwareAdapter::new(sensor_hub, PumpRelay::new());
    let time = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new();
    let mut telemetry = LogTelemetrySink::new();

    // ── 5. Construct control service ──────────────────────────
    let mut service = ControlService::new(&config);
    service.start(&mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    // One logical thread: the query collaborator reads
    // `service.snapshot()` (via `adapters::query::StatusReport`) between
    // cycles, so the single-writer snapshot needs no locking.
    loop {
        service.tick(time.uptime_us(), &mut hw, &mut telemetry, &mut log_sink);
        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.loop_delay_ms,
        )));
    }
}
