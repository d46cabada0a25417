//! Unit tests for the menu state machine.
//!
//! These tests run on the host with a scripted RTC and drive the menu one
//! tick at a time, the way the menu task does on target.

use super::{Menu, MenuState};
use crate::calendar::{Date, Time};
use crate::error::{Error, Result};
use crate::input::Button;
use crate::rtc::RtcGateway;
use crate::store::TimeDateStore;

/// RTC double: serves `time`, records writes, can be made unreachable.
struct FakeRtc {
    time: Time,
    online: bool,
    reads: usize,
    written: Option<Time>,
    date_writes: usize,
}

impl FakeRtc {
    fn at(time: Time) -> Self {
        Self {
            time,
            online: true,
            reads: 0,
            written: None,
            date_writes: 0,
        }
    }
}

impl RtcGateway for FakeRtc {
    fn read_time(&mut self) -> Result<Time> {
        self.reads += 1;
        if self.online {
            Ok(self.time)
        } else {
            Err(Error::BusUnavailable)
        }
    }

    fn write_time(&mut self, time: &Time) -> Result<()> {
        if !self.online {
            return Err(Error::BusUnavailable);
        }
        self.time = *time;
        self.written = Some(*time);
        Ok(())
    }

    fn read_date(&mut self) -> Result<Date> {
        Err(Error::NotImplemented)
    }

    fn write_date(&mut self, _date: &Date) -> Result<()> {
        self.date_writes += 1;
        Err(Error::NotImplemented)
    }
}

struct Rig {
    menu: Menu,
    store: TimeDateStore,
    rtc: FakeRtc,
}

impl Rig {
    fn new() -> Self {
        Self {
            menu: Menu::new(),
            store: TimeDateStore::new(),
            rtc: FakeRtc::at(Time::new(8, 15, 30)),
        }
    }

    fn in_state(state: MenuState) -> Self {
        let mut rig = Self::new();
        rig.menu.restore_state(state.code()).unwrap();
        rig
    }

    fn tick(&mut self, button: Button) -> MenuState {
        self.menu.step(&mut self.store, button, &mut self.rtc)
    }

    fn ticks(&mut self, buttons: &[Button]) -> MenuState {
        let mut state = self.menu.state();
        for &b in buttons {
            state = self.tick(b);
        }
        state
    }
}

const RING: [MenuState; 5] = [
    MenuState::Alarms,
    MenuState::Chronometer,
    MenuState::Counter,
    MenuState::SetTime,
    MenuState::SetDate,
];

// ═══════════════════════════════════════════════════════════════════════════
// Root display
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn display_reads_rtc_and_renders_padded() {
    let mut rig = Rig::new();
    rig.rtc.time = Time::new(7, 5, 3);
    rig.store.actual_date = Date::new(4, 9, 2031);

    assert_eq!(rig.tick(Button::None), MenuState::Display);
    assert_eq!(rig.store.actual_time, Time::new(7, 5, 3));
    assert_eq!(rig.menu.frame().line(0), "07:05:03");
    assert_eq!(rig.menu.frame().line(1), "04/09/2031");
    assert_eq!(rig.menu.frame().cursor(), None);
}

#[test]
fn display_rereads_every_tick() {
    let mut rig = Rig::new();
    rig.tick(Button::None);
    rig.rtc.time = Time::new(8, 15, 31);
    rig.tick(Button::None);

    assert_eq!(rig.rtc.reads, 2);
    assert_eq!(rig.menu.frame().line(0), "08:15:31");
}

#[test]
fn display_year_is_not_padded() {
    let mut rig = Rig::new();
    rig.store.actual_date = Date::new(1, 1, 0);
    rig.tick(Button::None);
    assert_eq!(rig.menu.frame().line(1), "01/01/0");
}

#[test]
fn display_enters_ring_on_up_or_down() {
    for b in [Button::Up, Button::Down] {
        let mut rig = Rig::new();
        assert_eq!(rig.tick(b), MenuState::Alarms);
    }
    for b in [Button::Left, Button::Right, Button::Select, Button::None] {
        let mut rig = Rig::new();
        assert_eq!(rig.tick(b), MenuState::Display);
    }
}

#[test]
fn failed_read_keeps_time_and_retries_next_tick() {
    let mut rig = Rig::new();
    rig.store.actual_time = Time::new(1, 2, 3);
    rig.rtc.online = false;

    assert_eq!(rig.tick(Button::None), MenuState::Display);
    assert_eq!(rig.store.actual_time, Time::new(1, 2, 3));
    assert_eq!(rig.menu.frame().line(0), "01:02:03");

    rig.rtc.online = true;
    rig.tick(Button::None);
    assert_eq!(rig.rtc.reads, 2);
    assert_eq!(rig.store.actual_time, Time::new(8, 15, 30));
}

// ═══════════════════════════════════════════════════════════════════════════
// Navigation ring
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn ring_steps_to_neighbours() {
    for pair in RING.windows(2) {
        let mut rig = Rig::in_state(pair[0]);
        assert_eq!(rig.tick(Button::Down), pair[1]);

        let mut rig = Rig::in_state(pair[1]);
        assert_eq!(rig.tick(Button::Up), pair[0]);
    }
}

#[test]
fn ring_has_ends() {
    let mut rig = Rig::in_state(MenuState::Alarms);
    assert_eq!(rig.tick(Button::Up), MenuState::Alarms);

    let mut rig = Rig::in_state(MenuState::SetDate);
    assert_eq!(rig.tick(Button::Down), MenuState::SetDate);
}

#[test]
fn left_leaves_ring_from_anywhere() {
    for state in RING {
        let mut rig = Rig::in_state(state);
        assert_eq!(rig.tick(Button::Left), MenuState::Display);
    }
}

#[test]
fn ring_labels() {
    let expected = ["Alarms", "Chronometer", "Counter", "Set time", "Set date"];
    for (state, label) in RING.into_iter().zip(expected) {
        let mut rig = Rig::in_state(state);
        rig.tick(Button::None);
        assert_eq!(rig.menu.frame().line(0), label);
        assert_eq!(rig.menu.frame().line(1), "");
    }
}

#[test]
fn select_is_inert_outside_the_setters() {
    for state in [MenuState::Alarms, MenuState::Chronometer, MenuState::Counter] {
        let mut rig = Rig::in_state(state);
        assert_eq!(rig.tick(Button::Select), state);
    }
}

#[test]
fn held_button_retriggers_every_tick() {
    let mut rig = Rig::new();
    assert_eq!(rig.tick(Button::Down), MenuState::Alarms);
    assert_eq!(rig.tick(Button::Down), MenuState::Chronometer);
    assert_eq!(rig.tick(Button::Down), MenuState::Counter);
    assert_eq!(rig.tick(Button::Down), MenuState::SetTime);
    assert_eq!(rig.tick(Button::Down), MenuState::SetDate);
    assert_eq!(rig.tick(Button::Down), MenuState::SetDate);
}

// ═══════════════════════════════════════════════════════════════════════════
// Time editor
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn entering_time_editor_loads_buffer_and_resets_cursor() {
    let mut rig = Rig::in_state(MenuState::SetTime);
    rig.store.actual_time = Time::new(9, 41, 0);
    rig.menu.cursor = 3;

    assert_eq!(rig.tick(Button::Select), MenuState::SetTimeDisplay);
    assert_eq!(rig.menu.cursor(), 0);
    assert_eq!(rig.store.edit_time, Time::new(9, 41, 0));

    // The date editor starts from column 0 as well.
    rig.ticks(&[Button::None, Button::Right, Button::Right]);
    assert_eq!(rig.menu.cursor(), 2);
    rig.menu.restore_state(MenuState::SetDate.code()).unwrap();
    assert_eq!(rig.tick(Button::Select), MenuState::SetDateDisplay);
    assert_eq!(rig.menu.cursor(), 0);
}

#[test]
fn time_display_renders_unpadded_and_moves_to_edit() {
    let mut rig = Rig::in_state(MenuState::SetTimeDisplay);
    rig.store.edit_time = Time::new(5, 7, 0);

    assert_eq!(rig.tick(Button::Up), MenuState::SetTimeEdit);
    assert_eq!(rig.menu.frame().line(0), "5 :7");
    assert_eq!(rig.menu.frame().cursor(), None);
    assert_eq!(rig.store.edit_time, Time::new(5, 7, 0));

    let mut rig = Rig::in_state(MenuState::SetTimeDisplay);
    rig.store.edit_time = Time::new(23, 59, 0);
    rig.tick(Button::None);
    assert_eq!(rig.menu.frame().line(0), "23:59");
}

#[test]
fn time_edit_shows_cursor() {
    let mut rig = Rig::in_state(MenuState::SetTimeEdit);
    rig.tick(Button::None);
    assert_eq!(rig.menu.frame().cursor(), Some((0, 0)));
}

#[test]
fn time_cursor_wraps_modulo_5() {
    for start in 0..5 {
        let mut rig = Rig::in_state(MenuState::SetTimeEdit);
        rig.menu.cursor = start;
        rig.ticks(&[Button::Right; 5]);
        assert_eq!(rig.menu.cursor(), start);
        assert_eq!(rig.menu.state(), MenuState::SetTimeEdit);
    }

    let mut rig = Rig::in_state(MenuState::SetTimeEdit);
    rig.tick(Button::Left);
    assert_eq!(rig.menu.cursor(), 4);
}

#[test]
fn time_fields_follow_cursor() {
    let cases = [
        (0, Button::Up, Time::new(13, 30, 0)),
        (1, Button::Down, Time::new(11, 30, 0)),
        (3, Button::Up, Time::new(12, 31, 0)),
        (4, Button::Down, Time::new(12, 29, 0)),
    ];
    for (cursor, button, expected) in cases {
        let mut rig = Rig::in_state(MenuState::SetTimeEdit);
        rig.store.edit_time = Time::new(12, 30, 0);
        rig.menu.cursor = cursor;

        assert_eq!(rig.tick(button), MenuState::SetTimeDisplay);
        assert_eq!(rig.store.edit_time, expected);
        assert_eq!(rig.store.actual_time, Time::MIDNIGHT);
    }
}

#[test]
fn separator_column_is_inert() {
    let mut rig = Rig::in_state(MenuState::SetTimeEdit);
    rig.store.edit_time = Time::new(12, 30, 0);
    rig.menu.cursor = 2;

    assert_eq!(rig.tick(Button::Up), MenuState::SetTimeEdit);
    assert_eq!(rig.tick(Button::Down), MenuState::SetTimeEdit);
    assert_eq!(rig.store.edit_time, Time::new(12, 30, 0));
}

#[test]
fn time_commit_writes_through_and_returns_home() {
    let mut rig = Rig::in_state(MenuState::SetTimeEdit);
    rig.store.edit_time = Time::new(6, 45, 10);

    assert_eq!(rig.tick(Button::Select), MenuState::CommitTime);
    assert_eq!(rig.store.actual_time, Time::MIDNIGHT);

    assert_eq!(rig.tick(Button::Select), MenuState::Display);
    assert_eq!(rig.store.actual_time, Time::new(6, 45, 10));
    assert_eq!(rig.rtc.written, Some(Time::new(6, 45, 10)));
    assert_eq!(rig.menu.frame().cursor(), None);
}

#[test]
fn time_commit_with_bus_down_keeps_new_time_in_memory() {
    let mut rig = Rig::in_state(MenuState::CommitTime);
    rig.store.edit_time = Time::new(6, 45, 10);
    rig.rtc.online = false;

    assert_eq!(rig.tick(Button::None), MenuState::Display);
    assert_eq!(rig.store.actual_time, Time::new(6, 45, 10));
    assert_eq!(rig.rtc.written, None);
}

// ═══════════════════════════════════════════════════════════════════════════
// Date editor
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn entering_date_editor_loads_buffer() {
    let mut rig = Rig::in_state(MenuState::SetDate);
    rig.store.actual_date = Date::new(17, 8, 2042);
    rig.store.edit_date = Date::new(2, 2, 2002);
    rig.menu.cursor = 7;

    assert_eq!(rig.tick(Button::Select), MenuState::SetDateDisplay);
    assert_eq!(rig.menu.cursor(), 0);
    assert_eq!(rig.store.edit_date, Date::new(17, 8, 2042));
}

#[test]
fn date_display_renders_columns() {
    let mut rig = Rig::in_state(MenuState::SetDateDisplay);
    rig.store.edit_date = Date::new(5, 3, 2024);

    assert_eq!(rig.tick(Button::None), MenuState::SetDateEdit);
    assert_eq!(rig.menu.frame().line(0), "");
    assert_eq!(rig.menu.frame().line(1), "5 /3 /2024");

    let mut rig = Rig::in_state(MenuState::SetDateDisplay);
    rig.store.edit_date = Date::new(25, 12, 2099);
    rig.tick(Button::None);
    assert_eq!(rig.menu.frame().line(1), "25/12/2099");
}

#[test]
fn date_cursor_wraps_modulo_10() {
    for start in 0..10 {
        let mut rig = Rig::in_state(MenuState::SetDateEdit);
        rig.menu.cursor = start;
        rig.ticks(&[Button::Right; 10]);
        assert_eq!(rig.menu.cursor(), start);
    }

    let mut rig = Rig::in_state(MenuState::SetDateEdit);
    rig.tick(Button::Left);
    assert_eq!(rig.menu.cursor(), 9);
    rig.tick(Button::None);
    assert_eq!(rig.menu.frame().cursor(), Some((9, 1)));
}

#[test]
fn date_fields_follow_cursor() {
    let base = Date::new(15, 6, 2050);
    let cases = [
        (0, Button::Up, Date::new(16, 6, 2050)),
        (1, Button::Down, Date::new(14, 6, 2050)),
        (3, Button::Up, Date::new(15, 7, 2050)),
        (4, Button::Down, Date::new(15, 5, 2050)),
        (6, Button::Up, Date::new(15, 6, 2051)),
        (9, Button::Down, Date::new(15, 6, 2049)),
    ];
    for (cursor, button, expected) in cases {
        let mut rig = Rig::in_state(MenuState::SetDateEdit);
        rig.store.edit_date = base;
        rig.menu.cursor = cursor;

        assert_eq!(rig.tick(button), MenuState::SetDateDisplay);
        assert_eq!(rig.store.edit_date, expected);
    }
}

#[test]
fn date_separator_columns_are_inert() {
    for cursor in [2, 5] {
        let mut rig = Rig::in_state(MenuState::SetDateEdit);
        rig.store.edit_date = Date::new(15, 6, 2050);
        rig.menu.cursor = cursor;

        assert_eq!(rig.tick(Button::Up), MenuState::SetDateEdit);
        assert_eq!(rig.store.edit_date, Date::new(15, 6, 2050));
    }
}

#[test]
fn date_day_edit_is_leap_aware() {
    let mut rig = Rig::in_state(MenuState::SetDateEdit);
    rig.store.edit_date = Date::new(1, 2, 2024);
    rig.tick(Button::Down);
    assert_eq!(rig.store.edit_date.day, 29);

    let mut rig = Rig::in_state(MenuState::SetDateEdit);
    rig.store.edit_date = Date::new(1, 2, 2023);
    rig.tick(Button::Down);
    assert_eq!(rig.store.edit_date.day, 28);
}

#[test]
fn date_commit_updates_memory_only() {
    let mut rig = Rig::in_state(MenuState::SetDateEdit);
    rig.store.edit_date = Date::new(29, 2, 2028);

    assert_eq!(rig.tick(Button::Select), MenuState::CommitDate);
    assert_eq!(rig.tick(Button::None), MenuState::Display);
    assert_eq!(rig.store.actual_date, Date::new(29, 2, 2028));
    assert_eq!(rig.rtc.date_writes, 1);

    rig.tick(Button::None);
    assert_eq!(rig.menu.frame().line(1), "29/02/2028");
}

// ═══════════════════════════════════════════════════════════════════════════
// RTC actions and recovery
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn read_time_action_refreshes_and_returns_home() {
    let mut rig = Rig::in_state(MenuState::ReadTime);
    assert_eq!(rig.tick(Button::Up), MenuState::Display);
    assert_eq!(rig.store.actual_time, Time::new(8, 15, 30));
}

#[test]
fn read_date_action_falls_back_to_memory() {
    let mut rig = Rig::in_state(MenuState::ReadDate);
    rig.store.actual_date = Date::new(9, 9, 2009);
    assert_eq!(rig.tick(Button::None), MenuState::Display);
    assert_eq!(rig.store.actual_date, Date::new(9, 9, 2009));
}

#[test]
fn state_codes_round_trip() {
    for code in 0..=13u8 {
        let state = MenuState::try_from(code).unwrap();
        assert_eq!(state.code(), code);
    }
}

#[test]
fn unknown_state_code_recovers_to_display() {
    let mut rig = Rig::in_state(MenuState::SetTimeEdit);

    assert_eq!(
        rig.menu.restore_state(200),
        Err(Error::UnknownMenuState(200))
    );
    assert_eq!(rig.menu.state(), MenuState::Display);
    assert_eq!(rig.tick(Button::None), MenuState::Display);
    assert_eq!(rig.menu.frame().line(0), "08:15:30");
}

#[test]
fn at_most_one_transition_per_tick() {
    // Select from SetTime lands in SetTimeDisplay, not further.
    let mut rig = Rig::in_state(MenuState::SetTime);
    assert_eq!(rig.tick(Button::Select), MenuState::SetTimeDisplay);
    // Rendering the editor never consumes the button.
    assert_eq!(rig.tick(Button::Select), MenuState::SetTimeEdit);
    assert_eq!(rig.tick(Button::Select), MenuState::CommitTime);
    assert_eq!(rig.tick(Button::Select), MenuState::Display);
}
