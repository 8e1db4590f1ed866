//! Input and power control
//!
//! The power button toggles between running and suspended. Presses are
//! debounced in software and deferred while the panel is busy.

pub mod controller;
pub mod debounce;

pub use controller::Pomodoro;
pub use debounce::Debouncer;
