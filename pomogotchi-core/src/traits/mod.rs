//! Collaborator traits
//!
//! These traits define the interface between the timer logic and the
//! board: the panel that shows the buffer and the timer that delivers ticks.

pub mod display;
pub mod tick;

pub use display::{DisplayTransport, TransportError};
pub use tick::TickSource;

#[cfg(test)]
pub(crate) mod mock;
