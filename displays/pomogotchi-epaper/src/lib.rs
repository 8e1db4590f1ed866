//! E-paper panel driver for Pomogotchi
//!
//! Drives the 2.13" 122x250 monochrome panel over a write-only SPI bus plus
//! DC, CS, RST and BUSY lines, and implements the core
//! [`DisplayTransport`](pomogotchi_core::traits::DisplayTransport) so the
//! phase machine can commit frames to it.
//!
//! # Frame layout
//!
//! The panel RAM is written top to bottom, 16 bytes per row. The first 125
//! rows come from the text half of the buffer, the last 125 from the image
//! half. A set bit is white.
//!
//! # Busy handling
//!
//! Every wait on the BUSY line is bounded by
//! [`EpaperConfig::busy_timeout_ms`]; a panel that never goes idle surfaces
//! [`TransportError::Timeout`](pomogotchi_core::traits::TransportError)
//! instead of hanging the caller.

#![no_std]
#![deny(unsafe_code)]

mod cmd;
pub mod driver;

pub use driver::{Color, EpaperConfig, Epd2in13, InitStep, INIT_SEQUENCE, SPI_CONFIG};
