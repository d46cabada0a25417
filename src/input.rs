//! Analog keypad decoding.
//!
//! The five keys sit on one resistor ladder feeding a single analog input,
//! so each key produces its own voltage band. One sample maps to one
//! [`Button`]; there is no debouncing or hysteresis.
//!
//! The decoded button is a level: it stays in the [`ButtonCell`] until the
//! next sample overwrites it, and readers never clear it.

use core::sync::atomic::{AtomicU8, Ordering};

/// Keypad symbol decoded from one sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Button {
    #[default]
    None = 0,
    Up = 1,
    Right = 2,
    Down = 3,
    Left = 4,
    Select = 5,
}

impl Button {
    /// Map one 10-bit sample onto its key band.
    ///
    /// Samples between bands (ADC noise while a key settles) read as
    /// [`Button::None`].
    pub fn classify(sample: u16) -> Self {
        match sample {
            0..=20 => Button::Right,
            82..=122 => Button::Up,
            226..=266 => Button::Down,
            383..=423 => Button::Left,
            631..=671 => Button::Select,
            _ => Button::None,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Button::Up,
            2 => Button::Right,
            3 => Button::Down,
            4 => Button::Left,
            5 => Button::Select,
            _ => Button::None,
        }
    }
}

/// Latest decoded button, shared between the sampling task (writer) and
/// the menu tick (reader).
pub struct ButtonCell(AtomicU8);

impl ButtonCell {
    pub const fn new() -> Self {
        Self(AtomicU8::new(Button::None as u8))
    }

    /// Overwrite the latched button.
    pub fn store(&self, button: Button) {
        self.0.store(button as u8, Ordering::Release);
    }

    /// Read the latched button. The value is left in place.
    pub fn load(&self) -> Button {
        Button::from_bits(self.0.load(Ordering::Acquire))
    }
}

impl Default for ButtonCell {
    fn default() -> Self {
        Self::new()
    }
}
