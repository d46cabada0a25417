//! Character-grid frame produced by the menu.
//!
//! The menu draws into a `DISPLAY_ROWS × DISPLAY_COLUMNS` grid the way it
//! would drive a character LCD: position, then print. The board side
//! copies the grid to whatever panel is fitted.

use crate::config::{DISPLAY_COLUMNS, DISPLAY_ROWS};
use core::fmt::{self, Write};

/// Rendered screen content plus the optional visible cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: [[u8; DISPLAY_COLUMNS]; DISPLAY_ROWS],
    /// `(column, row)` of the visible cursor.
    cursor: Option<(usize, usize)>,
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            rows: [[b' '; DISPLAY_COLUMNS]; DISPLAY_ROWS],
            cursor: None,
        }
    }

    /// Blank every cell and hide the cursor.
    pub fn clear(&mut self) {
        self.rows = [[b' '; DISPLAY_COLUMNS]; DISPLAY_ROWS];
        self.cursor = None;
    }

    /// Print `text` starting at `(col, row)`. Characters past the right
    /// edge are dropped.
    pub fn put(&mut self, col: usize, row: usize, text: &str) {
        self.put_fmt(col, row, format_args!("{}", text));
    }

    /// Formatted variant of [`Frame::put`].
    pub fn put_fmt(&mut self, col: usize, row: usize, args: fmt::Arguments<'_>) {
        let Some(cells) = self.rows.get_mut(row) else {
            return;
        };
        let _ = RowWriter { cells, col }.write_fmt(args);
    }

    pub fn show_cursor(&mut self, col: usize, row: usize) {
        self.cursor = Some((col, row));
    }

    pub fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    /// Text of `row` with trailing blanks removed.
    pub fn line(&self, row: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .map(str::trim_end)
            .unwrap_or("")
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

struct RowWriter<'a> {
    cells: &'a mut [u8; DISPLAY_COLUMNS],
    col: usize,
}

impl Write for RowWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            if let Some(cell) = self.cells.get_mut(self.col) {
                *cell = if b.is_ascii() { b } else { b'?' };
            }
            self.col += 1;
        }
        Ok(())
    }
}
