//! Inter-task communication channels
//!
//! The tick and button tasks only produce; the controller loop is the single
//! consumer and owns all timer state.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

/// Channel capacity for one-second ticks
const TICK_CHANNEL_SIZE: usize = 8;

/// Channel capacity for button edges
const BUTTON_CHANNEL_SIZE: usize = 4;

/// One-second ticks from the tick task
pub static TICK_CHANNEL: Channel<CriticalSectionRawMutex, (), TICK_CHANNEL_SIZE> = Channel::new();

/// Falling edges on the power button, stamped with their arrival time (ms)
///
/// Edges that arrive while the controller is committing a frame wait here.
pub static BUTTON_EDGES: Channel<CriticalSectionRawMutex, u32, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Tick delivery enabled
pub static TICKS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Restart the tick period (sent on enable)
pub static TICK_RESTART: Signal<CriticalSectionRawMutex, ()> = Signal::new();
