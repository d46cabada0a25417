//! Binary-coded decimal helpers for the RTC registers.
//!
//! High nibble holds the tens digit, low nibble the units digit.

/// Encode a two-digit value (0–99).
pub const fn encode(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Decode one register byte. All four high bits count as tens, so control
/// bits sharing the register are not masked off.
pub const fn decode(byte: u8) -> u8 {
    (byte >> 4) * 10 + (byte & 0x0F)
}
