//! Pomogotchi - Pomodoro Timer Firmware
//!
//! Firmware for a Nucleo-F429ZI with a 2.13" e-paper panel. Counts focus
//! and rest phases on a one-second tick and shows the phase, the minutes
//! left and a tamagotchi that matches the phase. The user button suspends
//! and resumes the timer.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::spi::Spi;
use {defmt_rtt as _, panic_probe as _};

use pomogotchi_core::config::PomodoroConfig;
use pomogotchi_core::Pomodoro;
use pomogotchi_epaper::{EpaperConfig, Epd2in13, SPI_CONFIG};

use crate::board::{spi_config, BoardClock, BoardInput, BoardOutput, BoardSpi};
use crate::ticks::FirmwareTicks;

mod board;
mod channels;
mod tasks;
mod ticks;

bind_interrupts!(struct Irqs {
    EXTI15_10 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI15_10>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pomogotchi firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // SPI1 (SCK=PA5, MOSI=PA7), transmit only
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PA5, p.PA7, spi_config(&SPI_CONFIG));

    // Panel control lines
    let cs = Output::new(p.PB0, Level::High, Speed::VeryHigh);
    let dc = Output::new(p.PB2, Level::Low, Speed::VeryHigh);
    let rst = Output::new(p.PB8, Level::High, Speed::VeryHigh);
    let busy = Input::new(p.PB5, Pull::None);

    let mut panel = Epd2in13::new(
        BoardSpi(spi),
        BoardOutput(dc),
        BoardOutput(cs),
        BoardOutput(rst),
        BoardInput(busy),
        BoardClock,
        EpaperConfig::default(),
    );

    // A panel that fails init still gets commits; each failure is logged
    match panel.init() {
        Ok(()) => info!("Panel initialized"),
        Err(e) => error!("Panel init failed: {}", e),
    }

    let config = PomodoroConfig::default();
    info!(
        "Durations: focus={} short={} long={} min, long rest after {} focus",
        config.focus_minutes,
        config.short_rest_minutes,
        config.long_rest_minutes,
        u16::from(config.cycle_threshold) + 1
    );

    let mut pomodoro = match Pomodoro::new(config, panel, FirmwareTicks) {
        Ok(pomodoro) => pomodoro,
        Err(e) => defmt::panic!("Invalid timer configuration: {}", e),
    };

    // User button (PC13), external pull-down on the Nucleo board
    let button = ExtiInput::new(p.PC13, p.EXTI13, Pull::None, Irqs);

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    info!("All tasks spawned");

    tasks::controller::run(&mut pomodoro).await;
}
