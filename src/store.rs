//! Authoritative time/date plus the edit buffers the menu composes into.
//!
//! The edit buffers only reach the authoritative values through
//! [`TimeDateStore::commit_time`] / [`TimeDateStore::commit_date`].

use crate::calendar::{Date, Time};
use crate::config::INITIAL_EDIT_HOURS;

/// Editable field of a [`Time`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    Hours,
    Minutes,
}

/// Editable field of a [`Date`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateField {
    Day,
    Month,
    Year,
}

/// Step direction of a field adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeDateStore {
    /// Last value read from (or committed to) the RTC.
    pub actual_time: Time,
    /// In-memory date; the RTC date registers are not read.
    pub actual_date: Date,
    pub edit_time: Time,
    pub edit_date: Date,
}

impl TimeDateStore {
    /// Power-up state: 00:00:00, 01/01/2000, edit hours preset to 12.
    pub const fn new() -> Self {
        Self {
            actual_time: Time::MIDNIGHT,
            actual_date: Date::EPOCH,
            edit_time: Time::new(INITIAL_EDIT_HOURS, 0, 0),
            edit_date: Date::EPOCH,
        }
    }

    pub fn load_edit_time_from_actual(&mut self) {
        self.edit_time = self.actual_time;
    }

    pub fn load_edit_date_from_actual(&mut self) {
        self.edit_date = self.actual_date;
    }

    /// Copy the whole time edit buffer over the authoritative time.
    pub fn commit_time(&mut self) -> Time {
        self.actual_time = self.edit_time;
        self.actual_time
    }

    /// Copy the whole date edit buffer over the authoritative date.
    pub fn commit_date(&mut self) -> Date {
        self.actual_date = self.edit_date;
        self.actual_date
    }

    pub fn adjust_time_field(&mut self, field: TimeField, direction: Direction) {
        let t = self.edit_time;
        self.edit_time = match (field, direction) {
            (TimeField::Hours, Direction::Up) => t.increment_hours(),
            (TimeField::Hours, Direction::Down) => t.decrement_hours(),
            (TimeField::Minutes, Direction::Up) => t.increment_minutes(),
            (TimeField::Minutes, Direction::Down) => t.decrement_minutes(),
        };
    }

    pub fn adjust_date_field(&mut self, field: DateField, direction: Direction) {
        let d = self.edit_date;
        self.edit_date = match (field, direction) {
            (DateField::Day, Direction::Up) => d.increment_day(),
            (DateField::Day, Direction::Down) => d.decrement_day(),
            (DateField::Month, Direction::Up) => d.increment_month(),
            (DateField::Month, Direction::Down) => d.decrement_month(),
            (DateField::Year, Direction::Up) => d.increment_year(),
            (DateField::Year, Direction::Down) => d.decrement_year(),
        };
    }
}

impl Default for TimeDateStore {
    fn default() -> Self {
        Self::new()
    }
}
