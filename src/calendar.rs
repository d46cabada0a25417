//! Time and date records and the calendar arithmetic used to edit them.
//!
//! Every field steps on its own: days wrap inside the current month,
//! months wrap 1↔12 and years wrap inside the 2000–2099 window. Nothing
//! carries into the next field.

use crate::config::{YEAR_MAX, YEAR_MIN};

/// Wall-clock time, 24-hour notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    /// 0–59.
    pub seconds: u8,
    /// 0–59.
    pub minutes: u8,
    /// 0–23.
    pub hours: u8,
}

impl Time {
    pub const MIDNIGHT: Time = Time::new(0, 0, 0);

    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            seconds,
            minutes,
            hours,
        }
    }

    pub fn increment_hours(self) -> Self {
        Self {
            hours: (self.hours + 1) % 24,
            ..self
        }
    }

    pub fn decrement_hours(self) -> Self {
        Self {
            hours: (self.hours + 24 - 1) % 24,
            ..self
        }
    }

    pub fn increment_minutes(self) -> Self {
        Self {
            minutes: (self.minutes + 1) % 60,
            ..self
        }
    }

    pub fn decrement_minutes(self) -> Self {
        Self {
            minutes: (self.minutes + 60 - 1) % 60,
            ..self
        }
    }
}

/// Calendar date. `year` is the full year, not the two-digit register value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    /// 1–`days_in_month(month, year)`.
    pub day: u8,
    /// 1–12.
    pub month: u8,
    pub year: u16,
}

impl Date {
    pub const EPOCH: Date = Date::new(1, 1, YEAR_MIN);

    pub const fn new(day: u8, month: u8, year: u16) -> Self {
        Self { day, month, year }
    }

    /// Next day of the same month; the last day wraps to 1.
    pub fn increment_day(self) -> Self {
        let day = if self.day >= days_in_month(self.month, self.year) {
            1
        } else {
            self.day + 1
        };
        Self { day, ..self }
    }

    /// Previous day of the same month; day 1 wraps to the last day of the
    /// current month.
    pub fn decrement_day(self) -> Self {
        let day = if self.day <= 1 {
            days_in_month(self.month, self.year)
        } else {
            self.day - 1
        };
        Self { day, ..self }
    }

    pub fn increment_month(self) -> Self {
        let month = if self.month >= 12 { 1 } else { self.month + 1 };
        Self { month, ..self }
    }

    pub fn decrement_month(self) -> Self {
        let month = if self.month <= 1 { 12 } else { self.month - 1 };
        Self { month, ..self }
    }

    /// Stepping past 2099 lands on year 0, not 2000.
    pub fn increment_year(self) -> Self {
        let year = if self.year >= YEAR_MAX { 0 } else { self.year + 1 };
        Self { year, ..self }
    }

    /// Stepping below 2000 lands on 2099.
    pub fn decrement_year(self) -> Self {
        let year = if self.year <= YEAR_MIN {
            YEAR_MAX
        } else {
            self.year - 1
        };
        Self { year, ..self }
    }
}

/// `year % 4 == 0` is the whole leap rule; there is no century exception.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0
}

/// Number of days in `month` (1–12) of `year`.
pub fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
