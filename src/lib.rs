//! Host-testable core of the clockmenu firmware.
//!
//! Everything here is pure logic with no board dependency: calendar
//! arithmetic, the time/date store, keypad decoding, the DS3231 register
//! protocol (over any `embedded_hal::i2c::I2c`) and the menu state
//! machine.
//!
//! Usage: `cargo test` (host) or `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and only adds the board glue (SAADC sampling, I²C buses, OLED, tasks).

#![cfg_attr(not(test), no_std)]

// Must come first: the logging macros are textually scoped.
mod fmt;

pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod rtc;
pub mod store;

pub use calendar::{Date, Time};
pub use clock::Clock;
pub use error::Error;
pub use input::{Button, ButtonCell};
pub use menu::frame::Frame;
pub use menu::MenuState;
pub use rtc::{Ds3231, RtcGateway};
