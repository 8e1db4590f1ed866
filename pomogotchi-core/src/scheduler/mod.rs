//! Phase scheduler
//!
//! Counts one-second ticks against the current phase duration, decides
//! phase transitions and keeps the display buffer in step with them.

pub mod machine;

pub use machine::{PhaseMachine, SchedulerState, SECONDS_PER_MINUTE};
