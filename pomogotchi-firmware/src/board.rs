//! STM32F429ZI board adapters
//!
//! Wraps embassy-stm32 peripherals in the `pomogotchi-hal` traits the panel
//! driver is written against.
//!
//! Pin map (Nucleo-F429ZI):
//! - SPI1 SCK PA5, MOSI PA7
//! - Panel CS PB0, DC PB2, RST PB8, BUSY PB5
//! - User button PC13 (falling edge)

use embassy_stm32::gpio::{Input, Output};
use embassy_stm32::spi;
use embassy_stm32::time::Hertz;
use embassy_time::{block_for, Duration, Instant};
use pomogotchi_hal::spi::{Mode, SpiConfig};
use pomogotchi_hal::{Clock, InputPin, OutputPin, SpiBus};

/// Push-pull output
pub struct BoardOutput(pub Output<'static>);

impl OutputPin for BoardOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Floating input
pub struct BoardInput(pub Input<'static>);

impl InputPin for BoardInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Blocking SPI master
pub struct BoardSpi<S>(pub S);

impl<S: embedded_hal::spi::SpiBus> SpiBus for BoardSpi<S> {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)?;
        self.0.flush()
    }
}

/// Millisecond clock on the embassy time driver
pub struct BoardClock;

impl Clock for BoardClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

/// Translate device SPI settings into the embassy-stm32 config
pub fn spi_config(config: &SpiConfig) -> spi::Config {
    let mut spi_config = spi::Config::default();
    spi_config.frequency = Hertz(config.frequency);
    spi_config.mode = match config.mode {
        Mode::Mode0 => spi::MODE_0,
        Mode::Mode1 => spi::MODE_1,
        Mode::Mode2 => spi::MODE_2,
        Mode::Mode3 => spi::MODE_3,
    };
    spi_config
}
