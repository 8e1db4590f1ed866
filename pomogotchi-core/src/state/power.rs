//! Run/suspend state machine
//!
//! The power button is the only input. Each accepted press toggles between
//! running the timer and sitting suspended with the panel blanked.

/// Power states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// Timer ticking, phases advancing
    #[default]
    Running,
    /// Tick source disabled, waiting for the next press
    Suspended,
}

/// Events that drive the power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerEvent {
    /// Debounced press of the power button
    ButtonEdge,
}

impl RunState {
    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: PowerEvent) -> Self {
        match (self, event) {
            (RunState::Running, PowerEvent::ButtonEdge) => RunState::Suspended,
            (RunState::Suspended, PowerEvent::ButtonEdge) => RunState::Running,
        }
    }
}

impl From<bool> for RunState {
    fn from(running: bool) -> Self {
        if running {
            RunState::Running
        } else {
            RunState::Suspended
        }
    }
}
