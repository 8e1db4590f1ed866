//! Board-agnostic core logic for the Pomogotchi timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (display transport, tick source)
//! - Pomodoro phase state machine
//! - Display buffer (text rows, minutes line, tamagotchi image)
//! - Run/suspend controller with button debounce
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod power;
pub mod scheduler;
pub mod state;
pub mod traits;

pub use power::Pomodoro;
