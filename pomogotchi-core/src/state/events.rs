//! Events reported by the timer handlers

use heapless::Vec;

use super::phase::PomodoroPhase;
use crate::traits::TransportError;

/// Maximum events a single handler call can report
///
/// A transition tick that also drains a deferred resume is the widest
/// case: two phase entries, two minute redraws, the resume itself and a
/// transport fault for each of the four commits.
pub const MAX_EVENTS: usize = 10;

/// Events returned from a handler call, in the order they happened
pub type Events = Vec<Event, MAX_EVENTS>;

/// Move `more` onto the end of `events`, dropping whatever does not fit
pub fn append(events: &mut Events, more: Events) {
    for event in more {
        if events.push(event).is_err() {
            break;
        }
    }
}

/// What a handler did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Scheduler events
    /// A phase was entered and its caption committed
    PhaseEntered(PomodoroPhase),
    /// The minutes line was redrawn
    MinuteElapsed { minutes_left: u16 },

    // Power events
    /// Button press suspended the timer
    Suspended,
    /// Button press resumed the timer
    Resumed,
    /// Button edge fell inside the debounce window
    EdgeIgnored,
    /// Button edge arrived during a display transaction and was queued
    EdgeDeferred,

    // Display events
    /// A panel commit failed; the logical state still advanced
    DisplayFault(TransportError),
}

impl Event {
    /// Check if this event indicates an error
    pub fn is_error_event(&self) -> bool {
        matches!(self, Event::DisplayFault(_))
    }
}
