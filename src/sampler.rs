//! Analog keypad sampling.
//!
//! All five keys share one resistor ladder on AIN0. The SAADC is sampled
//! on a fixed period, the reading classified into a [`Button`] and the
//! result latched into the shared [`ButtonCell`] for the menu task.
//! Level-triggered: a held key reads back on every sample.

use clockmenu::config::{ADC_MAX_SAMPLE, SAMPLE_PERIOD_MS};
use clockmenu::{Button, ButtonCell};
use defmt::debug;
use embassy_nrf::saadc::Saadc;
use embassy_time::{Duration, Ticker};

/// Run the keypad sampling loop forever.
pub async fn sample_loop(mut adc: Saadc<'static, 1>, cell: &'static ButtonCell) -> ! {
    adc.calibrate().await;

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));
    let mut last = Button::None;

    loop {
        let mut buf = [0i16; 1];
        adc.sample(&mut buf).await;

        let button = Button::classify(to_sample(buf[0]));
        cell.store(button);

        if button != last {
            debug!("Keypad: {} (raw {})", button, buf[0]);
            last = button;
        }

        ticker.next().await;
    }
}

/// Single-ended readings can dip slightly below zero; clamp into the
/// 10-bit range the classifier expects.
fn to_sample(raw: i16) -> u16 {
    raw.clamp(0, ADC_MAX_SAMPLE as i16) as u16
}
