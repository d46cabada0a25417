//! Unified error type for clockmenu.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the firmware.
///
/// Nothing here is fatal: the menu tick logs the error and either skips
/// the request until the next tick or recovers to the root display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // RTC
    /// The RTC bus transaction was rejected (start not acknowledged or
    /// aborted mid-transfer). The request is skipped for this tick.
    BusUnavailable,

    /// Date registers of the RTC are not wired up. Callers keep using the
    /// in-memory date.
    NotImplemented,

    // Menu
    /// A raw menu state code that names no state.
    UnknownMenuState(u8),
}

pub type Result<T> = core::result::Result<T, Error>;
