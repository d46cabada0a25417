//! Real-time-clock gateway.
//!
//! The menu talks to the clock chip through [`RtcGateway`]; [`Ds3231`] is
//! the implementation for a DS3231/DS1307-style register map on any
//! blocking `embedded_hal::i2c::I2c` bus.
//!
//! Wire contract (7-bit address 0x68):
//!
//! - read:  `START W [0x00] STOP`, then `START R [sec ACK] [min ACK] [hour NACK] STOP`
//! - write: `START W [0x00] [0x00] [min] [hour] STOP`
//!
//! Setting the time restarts the seconds register at zero.
//!
//! All registers are BCD. Only the time registers are used; the date
//! registers are not wired up yet.

pub mod bcd;

use crate::calendar::{Date, Time};
use crate::config::{RTC_I2C_ADDRESS, RTC_TIME_REGISTER};
use crate::error::{Error, Result};
use embedded_hal::i2c::I2c;

/// Operations the menu needs from the clock chip.
///
/// A failed call must leave nothing half-applied: callers keep their
/// previous values and try again on a later tick.
pub trait RtcGateway {
    fn read_time(&mut self) -> Result<Time>;
    fn write_time(&mut self, time: &Time) -> Result<()>;
    fn read_date(&mut self) -> Result<Date>;
    fn write_date(&mut self, date: &Date) -> Result<()>;
}

/// DS3231 on a blocking I²C bus.
pub struct Ds3231<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Ds3231<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(e: E) -> Error {
    warn!("RTC bus error: {}", e.kind());
    Error::BusUnavailable
}

impl<I2C: I2c> RtcGateway for Ds3231<I2C> {
    fn read_time(&mut self) -> Result<Time> {
        // Register pointer first, in its own transaction.
        self.i2c
            .write(RTC_I2C_ADDRESS, &[RTC_TIME_REGISTER])
            .map_err(bus_error)?;

        let mut regs = [0u8; 3];
        self.i2c
            .read(RTC_I2C_ADDRESS, &mut regs)
            .map_err(bus_error)?;

        let [seconds, minutes, hours] = regs.map(bcd::decode);
        Ok(Time::new(hours, minutes, seconds))
    }

    fn write_time(&mut self, time: &Time) -> Result<()> {
        let frame = [
            RTC_TIME_REGISTER,
            bcd::encode(0),
            bcd::encode(time.minutes),
            bcd::encode(time.hours),
        ];
        self.i2c
            .write(RTC_I2C_ADDRESS, &frame)
            .map_err(bus_error)
    }

    fn read_date(&mut self) -> Result<Date> {
        // TODO: read registers 0x04..=0x06 (date, month/century, year).
        Err(Error::NotImplemented)
    }

    fn write_date(&mut self, _date: &Date) -> Result<()> {
        Err(Error::NotImplemented)
    }
}
