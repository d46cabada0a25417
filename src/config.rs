//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// RTC (DS3231)

/// 7-bit bus address of the real-time-clock peripheral.
pub const RTC_I2C_ADDRESS: u8 = 0x68;

/// Register pointer of the seconds register. Minutes and hours follow
/// contiguously.
pub const RTC_TIME_REGISTER: u8 = 0x00;

// Scheduling

/// Period of one menu state machine tick (ms).
///
/// Matches a 16-bit timer overflow at 16 MHz / 64 (~262 ms).
pub const TICK_PERIOD_MS: u64 = 262;

/// Period of the keypad analog sample (ms). The sample is taken at the
/// tick rate, like an ADC auto-triggered by the tick timer.
pub const SAMPLE_PERIOD_MS: u64 = 262;

// Keypad

/// Largest value produced by the 10-bit keypad sample.
pub const ADC_MAX_SAMPLE: u16 = 1023;

// Display geometry

/// Character columns of the rendered frame.
pub const DISPLAY_COLUMNS: usize = 16;

/// Character rows of the rendered frame.
pub const DISPLAY_ROWS: usize = 2;

// Calendar window

/// First year of the two-digit-century window.
pub const YEAR_MIN: u16 = 2000;

/// Last year of the two-digit-century window.
pub const YEAR_MAX: u16 = 2099;

// Power-up state

/// Hours preloaded into the time edit buffer at power-up.
pub const INITIAL_EDIT_HOURS: u8 = 12;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// are picked in `main.rs`.  Adjust for your custom PCB.
//
//   Keypad ladder   → AIN0 / P0.02  (five keys on one resistor divider)
//   RTC I²C SDA     → P0.26
//   RTC I²C SCL     → P0.27
//   OLED I²C SDA    → P1.13
//   OLED I²C SCL    → P1.15
