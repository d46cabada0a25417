//! Menu state machine.
//!
//! One call to [`Menu::step`] per tick. A step renders the active state,
//! looks at the latched button and performs at most one transition.
//!
//! ```text
//!  Display ──Up/Down──▶ Alarms ⇄ Chronometer ⇄ Counter ⇄ SetTime ⇄ SetDate
//!     ▲                    (Up = previous, Down = next, Left = Display)
//!     │                                           │Select        │Select
//!     │                          SetTimeDisplay ◀─┘  SetDateDisplay ◀┘
//!     │                             ⇅ (field edit)      ⇅ (field edit)
//!     │                          SetTimeEdit          SetDateEdit
//!     │                             │Select              │Select
//!     └──────────────────────── CommitTime            CommitDate
//! ```
//!
//! The navigation ring has ends: Alarms has no `Up` neighbour and SetDate
//! has no `Down` neighbour.

pub mod frame;

#[cfg(test)]
mod tests;

use crate::error::Error;
use crate::input::Button;
use crate::rtc::RtcGateway;
use crate::store::{DateField, Direction, TimeDateStore, TimeField};
use frame::Frame;

/// Width of the `H:M` edit line addressed by the cursor.
const TIME_CURSOR_SPAN: u8 = 5;
/// Width of the `D/M/Y` edit line addressed by the cursor.
const DATE_CURSOR_SPAN: u8 = 10;

/// Row the time editor draws on.
const TIME_ROW: usize = 0;
/// Row the date editor draws on.
const DATE_ROW: usize = 1;

/// Top-level entries reachable with Up/Down, in display order.
const NAVIGATION_RING: [MenuState; 5] = [
    MenuState::Alarms,
    MenuState::Chronometer,
    MenuState::Counter,
    MenuState::SetTime,
    MenuState::SetDate,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MenuState {
    /// Root: current time and date.
    Display = 0,

    // Navigation ring
    Alarms = 1,
    Chronometer = 2,
    Counter = 3,
    SetTime = 4,
    SetDate = 5,

    // Time editor
    SetTimeDisplay = 6,
    SetTimeEdit = 7,

    // Date editor
    SetDateDisplay = 8,
    SetDateEdit = 9,

    // RTC actions, each runs once and returns to Display
    ReadTime = 10,
    CommitTime = 11,
    ReadDate = 12,
    CommitDate = 13,
}

impl MenuState {
    /// Compact identifier of the state.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Label shown for a navigation ring entry.
    pub fn label(self) -> Option<&'static str> {
        match self {
            MenuState::Alarms => Some("Alarms"),
            MenuState::Chronometer => Some("Chronometer"),
            MenuState::Counter => Some("Counter"),
            MenuState::SetTime => Some("Set time"),
            MenuState::SetDate => Some("Set date"),
            _ => None,
        }
    }

    fn ring_position(self) -> Option<usize> {
        NAVIGATION_RING.iter().position(|&s| s == self)
    }

    /// Ring neighbour above, `None` at the top end.
    fn ring_previous(self) -> Option<MenuState> {
        let pos = self.ring_position()?;
        pos.checked_sub(1).map(|p| NAVIGATION_RING[p])
    }

    /// Ring neighbour below, `None` at the bottom end.
    fn ring_next(self) -> Option<MenuState> {
        let pos = self.ring_position()?;
        NAVIGATION_RING.get(pos + 1).copied()
    }
}

impl TryFrom<u8> for MenuState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => MenuState::Display,
            1 => MenuState::Alarms,
            2 => MenuState::Chronometer,
            3 => MenuState::Counter,
            4 => MenuState::SetTime,
            5 => MenuState::SetDate,
            6 => MenuState::SetTimeDisplay,
            7 => MenuState::SetTimeEdit,
            8 => MenuState::SetDateDisplay,
            9 => MenuState::SetDateEdit,
            10 => MenuState::ReadTime,
            11 => MenuState::CommitTime,
            12 => MenuState::ReadDate,
            13 => MenuState::CommitDate,
            _ => return Err(Error::UnknownMenuState(code)),
        })
    }
}

fn time_field_at(cursor: u8) -> Option<TimeField> {
    match cursor {
        0 | 1 => Some(TimeField::Hours),
        3 | 4 => Some(TimeField::Minutes),
        _ => None,
    }
}

fn date_field_at(cursor: u8) -> Option<DateField> {
    match cursor {
        0 | 1 => Some(DateField::Day),
        3 | 4 => Some(DateField::Month),
        6..=9 => Some(DateField::Year),
        _ => None,
    }
}

fn direction_of(button: Button) -> Option<Direction> {
    match button {
        Button::Up => Some(Direction::Up),
        Button::Down => Some(Direction::Down),
        _ => None,
    }
}

/// Menu position, edit cursor and the last rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    state: MenuState,
    cursor: u8,
    frame: Frame,
}

impl Menu {
    pub const fn new() -> Self {
        Self {
            state: MenuState::Display,
            cursor: 0,
            frame: Frame::new(),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Column of the edit cursor.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Resume from a raw state code. A code naming no state falls back to
    /// the root display.
    pub fn restore_state(&mut self, code: u8) -> Result<MenuState, Error> {
        match MenuState::try_from(code) {
            Ok(state) => {
                self.state = state;
                Ok(state)
            }
            Err(e) => {
                warn!("Menu: {}, back to Display", e);
                self.state = MenuState::Display;
                Err(e)
            }
        }
    }

    /// Run one tick. Returns the state the next tick will run.
    pub fn step<R: RtcGateway>(
        &mut self,
        store: &mut TimeDateStore,
        button: Button,
        rtc: &mut R,
    ) -> MenuState {
        let from = self.state;
        let to = match from {
            MenuState::Display => self.display(store, button, rtc),
            MenuState::Alarms
            | MenuState::Chronometer
            | MenuState::Counter
            | MenuState::SetTime
            | MenuState::SetDate => self.navigate(from, store, button),
            MenuState::SetTimeDisplay => self.time_display(store),
            MenuState::SetTimeEdit => self.time_edit(store, button),
            MenuState::SetDateDisplay => self.date_display(store),
            MenuState::SetDateEdit => self.date_edit(store, button),
            MenuState::ReadTime => self.read_time(store, rtc),
            MenuState::CommitTime => self.commit_time(store, rtc),
            MenuState::ReadDate => self.read_date(store, rtc),
            MenuState::CommitDate => self.commit_date(store, rtc),
        };
        if to != from {
            debug!("Menu: {} -> {}", from, to);
        }
        self.state = to;
        to
    }

    fn refresh_time<R: RtcGateway>(store: &mut TimeDateStore, rtc: &mut R) {
        match rtc.read_time() {
            Ok(time) => store.actual_time = time,
            // Keep the previous time; the next Display tick reads again.
            Err(e) => warn!("Menu: time read skipped: {}", e),
        }
    }

    fn display<R: RtcGateway>(
        &mut self,
        store: &mut TimeDateStore,
        button: Button,
        rtc: &mut R,
    ) -> MenuState {
        self.frame.clear();
        Self::refresh_time(store, rtc);

        let t = store.actual_time;
        let d = store.actual_date;
        self.frame.put_fmt(
            0,
            0,
            format_args!("{:02}:{:02}:{:02}", t.hours, t.minutes, t.seconds),
        );
        self.frame.put_fmt(
            0,
            1,
            format_args!("{:02}/{:02}/{}", d.day, d.month, d.year),
        );

        match button {
            Button::Up | Button::Down => MenuState::Alarms,
            _ => MenuState::Display,
        }
    }

    fn navigate(
        &mut self,
        state: MenuState,
        store: &mut TimeDateStore,
        button: Button,
    ) -> MenuState {
        self.frame.clear();
        if let Some(label) = state.label() {
            self.frame.put(0, 0, label);
        }

        match (button, state) {
            (Button::Up, _) => state.ring_previous().unwrap_or(state),
            (Button::Down, _) => state.ring_next().unwrap_or(state),
            (Button::Left, _) => MenuState::Display,
            (Button::Select, MenuState::SetTime) => {
                self.cursor = 0;
                store.load_edit_time_from_actual();
                MenuState::SetTimeDisplay
            }
            (Button::Select, MenuState::SetDate) => {
                self.cursor = 0;
                store.load_edit_date_from_actual();
                MenuState::SetDateDisplay
            }
            _ => state,
        }
    }

    fn time_display(&mut self, store: &TimeDateStore) -> MenuState {
        let t = store.edit_time;
        self.frame.clear();
        self.frame.put_fmt(0, TIME_ROW, format_args!("{}", t.hours));
        self.frame.put(2, TIME_ROW, ":");
        self.frame.put_fmt(3, TIME_ROW, format_args!("{}", t.minutes));
        MenuState::SetTimeEdit
    }

    fn time_edit(&mut self, store: &mut TimeDateStore, button: Button) -> MenuState {
        self.frame.show_cursor(usize::from(self.cursor), TIME_ROW);

        match button {
            Button::Left => {
                self.cursor = (self.cursor + TIME_CURSOR_SPAN - 1) % TIME_CURSOR_SPAN;
                MenuState::SetTimeEdit
            }
            Button::Right => {
                self.cursor = (self.cursor + 1) % TIME_CURSOR_SPAN;
                MenuState::SetTimeEdit
            }
            Button::Up | Button::Down => {
                match (time_field_at(self.cursor), direction_of(button)) {
                    (Some(field), Some(direction)) => {
                        store.adjust_time_field(field, direction);
                        MenuState::SetTimeDisplay
                    }
                    // Separator column.
                    _ => MenuState::SetTimeEdit,
                }
            }
            Button::Select => MenuState::CommitTime,
            Button::None => MenuState::SetTimeEdit,
        }
    }

    fn date_display(&mut self, store: &TimeDateStore) -> MenuState {
        let d = store.edit_date;
        self.frame.clear();
        self.frame.put_fmt(0, DATE_ROW, format_args!("{}", d.day));
        self.frame.put(2, DATE_ROW, "/");
        self.frame.put_fmt(3, DATE_ROW, format_args!("{}", d.month));
        self.frame.put(5, DATE_ROW, "/");
        self.frame.put_fmt(6, DATE_ROW, format_args!("{}", d.year));
        MenuState::SetDateEdit
    }

    fn date_edit(&mut self, store: &mut TimeDateStore, button: Button) -> MenuState {
        self.frame.show_cursor(usize::from(self.cursor), DATE_ROW);

        match button {
            Button::Left => {
                self.cursor = (self.cursor + DATE_CURSOR_SPAN - 1) % DATE_CURSOR_SPAN;
                MenuState::SetDateEdit
            }
            Button::Right => {
                self.cursor = (self.cursor + 1) % DATE_CURSOR_SPAN;
                MenuState::SetDateEdit
            }
            Button::Up | Button::Down => {
                match (date_field_at(self.cursor), direction_of(button)) {
                    (Some(field), Some(direction)) => {
                        store.adjust_date_field(field, direction);
                        MenuState::SetDateDisplay
                    }
                    _ => MenuState::SetDateEdit,
                }
            }
            Button::Select => MenuState::CommitDate,
            Button::None => MenuState::SetDateEdit,
        }
    }

    fn read_time<R: RtcGateway>(&mut self, store: &mut TimeDateStore, rtc: &mut R) -> MenuState {
        self.frame.hide_cursor();
        Self::refresh_time(store, rtc);
        MenuState::Display
    }

    fn commit_time<R: RtcGateway>(
        &mut self,
        store: &mut TimeDateStore,
        rtc: &mut R,
    ) -> MenuState {
        self.frame.hide_cursor();
        let time = store.commit_time();
        match rtc.write_time(&time) {
            Ok(()) => info!(
                "Menu: time set to {}:{}:{}",
                time.hours, time.minutes, time.seconds
            ),
            Err(e) => warn!("Menu: time write skipped: {}", e),
        }
        MenuState::Display
    }

    fn read_date<R: RtcGateway>(&mut self, store: &mut TimeDateStore, rtc: &mut R) -> MenuState {
        self.frame.hide_cursor();
        match rtc.read_date() {
            Ok(date) => store.actual_date = date,
            Err(Error::NotImplemented) => {
                debug!("Menu: RTC date not wired, keeping in-memory date")
            }
            Err(e) => warn!("Menu: date read skipped: {}", e),
        }
        MenuState::Display
    }

    fn commit_date<R: RtcGateway>(
        &mut self,
        store: &mut TimeDateStore,
        rtc: &mut R,
    ) -> MenuState {
        self.frame.hide_cursor();
        let date = store.commit_date();
        match rtc.write_date(&date) {
            Ok(()) => {}
            Err(Error::NotImplemented) => debug!("Menu: RTC date not wired, date kept in memory"),
            Err(e) => warn!("Menu: date write skipped: {}", e),
        }
        MenuState::Display
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
