//! clockmenu - nRF52840 desk clock firmware.
//!
//! Keeps time in a DS3231 RTC and lets the user browse a small menu and
//! set the time and date from a five-key analog keypad.
//!
//! Tasks:
//!   - `sample_task`  - SAADC keypad sampling into the button cell
//!   - `menu_task`    - menu tick, owns the clock state and the RTC bus
//!   - `display_task` - draws each rendered frame on the SSD1306 OLED

#![no_std]
#![no_main]

mod display;
mod sampler;

use clockmenu::config::TICK_PERIOD_MS;
use clockmenu::{ButtonCell, Clock, Ds3231, Frame};
use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::peripherals::{TWISPI0, TWISPI1};
use embassy_nrf::saadc::{self, ChannelConfig, Resolution, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM1_SPIS1_TWIM1_TWIS1_SPI1_TWI1 => twim::InterruptHandler<peripherals::TWISPI1>;
});

/// Latest keypad reading, written by the sampler and read by the menu.
static BUTTON: ButtonCell = ButtonCell::new();

/// Most recent frame for the display task. Only the newest one matters.
static FRAME_SIGNAL: Signal<CriticalSectionRawMutex, Frame> = Signal::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("clockmenu starting");

    // Keypad ladder on AIN0 (P0.02), 10-bit.
    let mut adc_config = saadc::Config::default();
    adc_config.resolution = Resolution::_10BIT;
    let channel = ChannelConfig::single_ended(p.P0_02);
    let adc = Saadc::new(p.SAADC, Irqs, adc_config, [channel]);

    // RTC bus: SDA P0.26, SCL P0.27.
    let rtc_bus = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());

    // OLED bus: SDA P1.13, SCL P1.15.
    let oled_bus = Twim::new(p.TWISPI1, Irqs, p.P1_13, p.P1_15, twim::Config::default());

    unwrap!(spawner.spawn(sample_task(adc)));
    unwrap!(spawner.spawn(display_task(oled_bus)));
    unwrap!(spawner.spawn(menu_task(Ds3231::new(rtc_bus))));
}

#[embassy_executor::task]
async fn sample_task(adc: Saadc<'static, 1>) {
    sampler::sample_loop(adc, &BUTTON).await
}

#[embassy_executor::task]
async fn menu_task(mut rtc: Ds3231<Twim<'static, TWISPI0>>) {
    let mut clock = Clock::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    loop {
        clock.tick(BUTTON.load(), &mut rtc);
        FRAME_SIGNAL.signal(clock.frame().clone());
        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn display_task(bus: Twim<'static, TWISPI1>) {
    let mut oled = display::init(bus);

    loop {
        let frame = FRAME_SIGNAL.wait().await;
        display::draw_frame(&mut oled, &frame);
    }
}
