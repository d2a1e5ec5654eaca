//! One-shot hardware peripheral initialization.
//!
//! Configures the ADC channel, GPIO directions, and the 1-Wire data pin
//! using raw ESP-IDF sys calls.  Called once from `main()` before the
//! control loop starts.  Also hosts the low-level GPIO/ADC/timing helpers
//! the sensor drivers build on.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path.  No concurrent access is possible because
/// `init_adc()` completes before the control loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    let ret =
        unsafe { adc_oneshot_config_channel(adc1_handle(), ADC1_CH_TURBIDITY, &chan_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    info!("hw_init: ADC1 configured (CH6=turbidity)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: ADC1_HANDLE is written once during init_adc() before this
    // function is called; single-threaded main-loop access guaranteed.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(_channel: u32) -> u16 {
    0
}

/// ADC1 channel for the turbidity sensor (GPIO 34 on ESP32).
pub const ADC1_CH_TURBIDITY: u32 = 6;

// ── GPIO ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio() -> Result<(), HwInitError> {
    // Outputs: pump relay and ultrasonic trigger, both driven LOW before
    // the loop starts (the relay must never energize on a half-booted
    // system; the trigger idles low between ranging cycles).
    let output_pins = [pins::PUMP_RELAY_GPIO, pins::ULTRASONIC_TRIG_GPIO];
    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    // Input: ultrasonic echo (externally driven, no pulls).
    let echo_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::ULTRASONIC_ECHO_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&echo_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    // 1-Wire data line: open-drain input/output.  The bus idles high via
    // the external 4.7 kΩ pull-up; the internal pull-up is enabled as a
    // fallback for short probe leads.
    let ow_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::WATER_TEMP_ONEWIRE_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT_OUTPUT_OD,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&ow_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    unsafe { gpio_set_level(pins::WATER_TEMP_ONEWIRE_GPIO, 1) };

    info!("hw_init: GPIO configured (relay, trig, echo, 1-wire)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    false
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured pin;
    // pin was validated during init_gpio(). Main-loop only.
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── Timing helpers ────────────────────────────────────────────

/// Busy-wait for `us` microseconds.  Used for the 1-Wire bit slots and the
/// ultrasonic trigger pulse, where timer-interrupt sleep is far too coarse.
#[cfg(target_os = "espidf")]
pub fn delay_us(us: u32) {
    // SAFETY: esp_rom_delay_us is a ROM busy-loop with no side effects.
    unsafe { esp_rom_delay_us(us) };
}

#[cfg(not(target_os = "espidf"))]
pub fn delay_us(_us: u32) {}

/// Monotonic microseconds since boot.
#[cfg(target_os = "espidf")]
pub fn monotonic_us() -> u64 {
    // SAFETY: esp_timer_get_time is a monotonic counter read.
    (unsafe { esp_timer_get_time() }) as u64
}

#[cfg(not(target_os = "espidf"))]
pub fn monotonic_us() -> u64 {
    0
}

/// Measure the width of the next `high` pulse on `pin`, in microseconds.
///
/// Waits at most `timeout_us` for the pulse to start, then at most
/// `timeout_us` for it to end.  Returns 0 if either bound expires — the
/// caller cannot distinguish a timeout from a zero-length pulse, matching
/// the transducer's "no echo" behavior.
#[cfg(target_os = "espidf")]
pub fn pulse_in_us(pin: i32, high: bool, timeout_us: u32) -> u32 {
    let deadline = monotonic_us() + u64::from(timeout_us);

    // Wait for any pulse in progress to end.
    while gpio_read(pin) == high {
        if monotonic_us() >= deadline {
            return 0;
        }
    }
    // Wait for the pulse to start.
    while gpio_read(pin) != high {
        if monotonic_us() >= deadline {
            return 0;
        }
    }
    let start = monotonic_us();
    // Measure until the pulse ends, bounded.
    while gpio_read(pin) == high {
        if monotonic_us() - start >= u64::from(timeout_us) {
            return 0;
        }
    }
    (monotonic_us() - start) as u32
}

#[cfg(not(target_os = "espidf"))]
pub fn pulse_in_us(_pin: i32, _high: bool, _timeout_us: u32) -> u32 {
    0
}
