//! Timer state definitions
//!
//! Two small, explicit state machines: the Pomodoro phase cycle and the
//! running/suspended power state. Events describe what a handler did.

pub mod events;
pub mod phase;
pub mod power;

pub use events::{append, Event, Events, MAX_EVENTS};
pub use phase::PomodoroPhase;
pub use power::{PowerEvent, RunState};
