//! Pomogotchi Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the panel driver is
//! written against. The firmware implements them on top of the chip HAL,
//! host tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pomogotchi-epaper (panel driver)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pomogotchi-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  firmware     │       │  host mocks   │
//! │  (stm32f429)  │       │  (tests)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiBus`] - Transmit-only SPI master
//! - [`clock::Clock`] - Millisecond counter and blocking delay

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::{InputPin, OutputPin};
pub use spi::SpiBus;
