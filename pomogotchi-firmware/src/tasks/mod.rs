//! Embassy async tasks
//!
//! The tick and button tasks feed channels; the controller loop runs on the
//! main task and owns the timer.

pub mod button;
pub mod controller;
pub mod tick;

pub use button::button_task;
pub use tick::tick_task;
