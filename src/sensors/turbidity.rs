//! Optical turbidity sensor on ADC1.
//!
//! The sensor outputs an analog voltage that falls as suspended solids
//! rise; a fixed quadratic calibration maps voltage to NTU.  Negative
//! curve output (clear water beyond the calibrated range) saturates to 0
//! rather than signalling an error — this channel never reports invalid.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

use crate::config::TurbidityCalibration;
use crate::sensors::Reading;

#[cfg(not(target_os = "espidf"))]
static SIM_TURBIDITY_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_turbidity_adc(raw: u16) {
    SIM_TURBIDITY_ADC.store(raw, Ordering::Relaxed);
}

/// Convert an ADC count to NTU: `V = count · vref / adc_max`, then the
/// quadratic calibration, clamped to the physical minimum of 0.
///
/// Always a valid reading — unlike the other converters, this channel has
/// no fault sentinel to detect, so it saturates instead of invalidating.
pub fn ntu_from_adc(count: u16, vref: f32, adc_max: u16, cal: &TurbidityCalibration) -> Reading {
    let voltage = f32::from(count) * vref / f32::from(adc_max);
    let ntu = cal.a * voltage * voltage + cal.b * voltage + cal.c;
    Reading::valid(ntu.max(0.0))
}

pub struct TurbiditySensor {
    vref: f32,
    adc_max: u16,
    cal: TurbidityCalibration,
}

impl TurbiditySensor {
    pub fn new(vref: f32, adc_max: u16, cal: TurbidityCalibration) -> Self {
        Self { vref, adc_max, cal }
    }

    /// One acquisition: ADC count → NTU reading.
    pub fn read(&mut self) -> Reading {
        let raw = self.read_adc();
        ntu_from_adc(raw, self.vref, self.adc_max, &self.cal)
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_TURBIDITY)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_TURBIDITY_ADC.load(Ordering::Relaxed)
    }
}
