//! SSD1306 OLED output for menu frames.
//!
//! Each frame row is drawn as one line of 6×10 text; the edit cursor is
//! an underline below its cell.

use clockmenu::config::DISPLAY_ROWS;
use clockmenu::Frame;
use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

const CELL_WIDTH: i32 = 6;
/// Baseline of the first text row.
const FIRST_BASELINE: i32 = 10;
/// Vertical distance between text rows.
const ROW_PITCH: i32 = 14;

const TEXT: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

/// Bring the panel up blank. A panel that does not answer is only
/// logged; the menu keeps running without it.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let mut display = Ssd1306::new(
        I2CDisplayInterface::new(i2c),
        DisplaySize128x64,
        DisplayRotation::Rotate0,
    )
    .into_buffered_graphics_mode();

    if display.init().is_err() {
        warn!("OLED: no answer on init");
    }
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn baseline(row: usize) -> i32 {
    FIRST_BASELINE + row as i32 * ROW_PITCH
}

/// Render `frame` and push it to the panel.
pub fn draw_frame<I2C>(display: &mut Display<I2C>, frame: &Frame)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    for row in 0..DISPLAY_ROWS {
        let line = frame.line(row);
        if !line.is_empty() {
            let _ = Text::new(line, Point::new(0, baseline(row)), TEXT).draw(display);
        }
    }

    if let Some((col, row)) = frame.cursor() {
        let x = col as i32 * CELL_WIDTH;
        let y = baseline(row) + 2;
        let _ = Line::new(Point::new(x, y), Point::new(x + CELL_WIDTH - 2, y))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(display);
    }

    let _ = display.flush();
}
