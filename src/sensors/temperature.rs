//! DS18B20 water temperature probe.
//!
//! One probe on a dedicated 1-Wire bus.  Each acquisition reads the
//! scratchpad written by the conversion started on the *previous* cycle,
//! then triggers the next conversion — the ~750 ms conversion time never
//! blocks the control loop.  Readings therefore lag one cycle; the first
//! read after power-up sees the 85 °C power-on scratchpad and reports
//! invalid.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the bit-banged bus in `drivers::onewire`.
//! On host/test: reads from a static atomic for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU32, Ordering};

use log::warn;

use crate::drivers::onewire::OneWireBus;
#[cfg(target_os = "espidf")]
use crate::drivers::onewire::{crc8, CMD_CONVERT_T, CMD_READ_SCRATCHPAD, CMD_SKIP_ROM};
use crate::error::SensorError;
use crate::sensors::Reading;

/// Bus-level "no device answered" value, reported when the probe is
/// unplugged or the bus faults mid-read.
pub const DISCONNECTED_C: f32 = -127.0;
/// DS18B20 power-on scratchpad value — an out-of-range artifact, not a
/// plausible reservoir temperature.
pub const POWER_ON_RESET_C: f32 = 85.0;

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_C: AtomicU32 = AtomicU32::new(0x7FC0_0000); // f32::NAN bits

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_c(celsius: f32) {
    SIM_TEMP_C.store(celsius.to_bits(), Ordering::Relaxed);
}

/// Pass the device-reported Celsius value through, mapping the two sentinel
/// values to an invalid reading.  Everything else is returned unchanged.
pub fn celsius_from_device(reported: f32) -> Reading {
    if reported == DISCONNECTED_C || reported == POWER_ON_RESET_C {
        Reading::invalid()
    } else {
        Reading::valid(reported)
    }
}

pub struct TemperatureSensor {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    bus: OneWireBus,
}

impl TemperatureSensor {
    pub fn new(onewire_gpio: i32) -> Self {
        Self {
            bus: OneWireBus::new(onewire_gpio),
        }
    }

    /// One acquisition: device Celsius → validity-tagged reading.
    pub fn read(&mut self) -> Reading {
        let celsius = match self.read_device_c() {
            Ok(c) => c,
            Err(e) => {
                warn!("temperature probe: {e}");
                DISCONNECTED_C
            }
        };
        celsius_from_device(celsius)
    }

    #[cfg(target_os = "espidf")]
    fn read_device_c(&mut self) -> Result<f32, SensorError> {
        // Collect the result of the conversion started last cycle.
        self.bus.reset()?;
        self.bus.write_byte(CMD_SKIP_ROM);
        self.bus.write_byte(CMD_READ_SCRATCHPAD);
        let mut scratchpad = [0u8; 9];
        for byte in &mut scratchpad {
            *byte = self.bus.read_byte();
        }
        if crc8(&scratchpad[..8]) != scratchpad[8] {
            return Err(SensorError::CrcMismatch);
        }

        // Start the next conversion; it completes well within one cycle.
        self.bus.reset()?;
        self.bus.write_byte(CMD_SKIP_ROM);
        self.bus.write_byte(CMD_CONVERT_T);

        let raw = i16::from_le_bytes([scratchpad[0], scratchpad[1]]);
        Ok(f32::from(raw) * 0.0625)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_device_c(&mut self) -> Result<f32, SensorError> {
        Ok(f32::from_bits(SIM_TEMP_C.load(Ordering::Relaxed)))
    }
}
