//! The appliance's whole mutable state in one record.
//!
//! The menu task owns a [`Clock`] and hands it, by `&mut`, to every tick.
//! Only the latched button lives outside, in a [`crate::input::ButtonCell`]
//! written by the sampling task.

use crate::input::Button;
use crate::menu::frame::Frame;
use crate::menu::{Menu, MenuState};
use crate::rtc::RtcGateway;
use crate::store::TimeDateStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clock {
    pub store: TimeDateStore,
    pub menu: Menu,
}

impl Clock {
    /// Power-up state: 00:00:00, 01/01/2000, root display.
    pub const fn new() -> Self {
        Self {
            store: TimeDateStore::new(),
            menu: Menu::new(),
        }
    }

    /// Run one menu tick against the latched `button`.
    pub fn tick<R: RtcGateway>(&mut self, button: Button, rtc: &mut R) -> MenuState {
        self.menu.step(&mut self.store, button, rtc)
    }

    /// Frame rendered by the last tick.
    pub fn frame(&self) -> &Frame {
        self.menu.frame()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
