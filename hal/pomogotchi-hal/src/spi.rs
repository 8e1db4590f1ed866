//! SPI bus abstractions
//!
//! The panel is write-only (MOSI, no MISO), so only the transmit half of an
//! SPI master is modelled.

/// Transmit-only SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data, blocking until the last byte has left the shift register
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

/// SPI settings required by a device
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
}
