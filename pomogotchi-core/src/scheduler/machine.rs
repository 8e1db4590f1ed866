//! Pomodoro phase state machine
//!
//! Owns the scheduler state, the display buffer and the display transport.
//! Every operation that redraws the panel runs between setting and clearing
//! `busy`, and reports what it did as [`Events`].

use crate::config::{ConfigError, PomodoroConfig};
use crate::display::{DisplayBuffer, Tamagotchi};
use crate::state::{Event, Events, PomodoroPhase};
use crate::traits::DisplayTransport;

/// Ticks per minute of phase time
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Caption lines shown while suspended
const SUSPENDED_CAPTION: [&str; 2] = [" BYE", " BYE"];

/// The single mutable scheduler record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SchedulerState {
    /// Current phase
    pub phase: PomodoroPhase,
    /// Seconds since the current phase was entered
    pub elapsed_seconds: u32,
    /// Duration of the current phase, copied from config on entry
    pub phase_duration_minutes: u16,
    /// Focus entries since the last long rest
    pub completed_focus_cycles: u8,
    /// A display transaction is in progress
    pub busy: bool,
    /// Timer is running (not suspended)
    pub running: bool,
}

impl SchedulerState {
    /// Initial state: Focus, nothing elapsed, running
    pub fn new(config: &PomodoroConfig) -> Self {
        Self {
            phase: PomodoroPhase::Focus,
            elapsed_seconds: 0,
            phase_duration_minutes: config.duration_minutes(PomodoroPhase::Focus),
            completed_focus_cycles: 0,
            busy: false,
            running: true,
        }
    }

    /// Whole minutes elapsed in the current phase
    pub fn elapsed_minutes(&self) -> u32 {
        self.elapsed_seconds / SECONDS_PER_MINUTE
    }

    /// Whole minutes left in the current phase
    pub fn minutes_left(&self) -> u16 {
        let elapsed = self.elapsed_minutes().min(u16::MAX as u32) as u16;
        self.phase_duration_minutes.saturating_sub(elapsed)
    }

    /// Check if the current phase has run its full duration
    pub fn phase_complete(&self) -> bool {
        self.elapsed_minutes() == self.phase_duration_minutes as u32
    }

    /// Check if this tick lands on a minute boundary
    pub fn on_minute_boundary(&self) -> bool {
        self.elapsed_seconds % SECONDS_PER_MINUTE == 0
    }
}

/// Phase state machine
///
/// Generic over the display transport so the board (or a test) decides how
/// frames reach the panel.
pub struct PhaseMachine<D: DisplayTransport> {
    /// Validated configuration
    config: PomodoroConfig,
    /// Scheduler record
    state: SchedulerState,
    /// In-memory panel content
    buffer: DisplayBuffer,
    /// Panel transport
    display: D,
    /// Last commit failed, panel may not match the buffer
    display_desynced: bool,
}

impl<D: DisplayTransport> PhaseMachine<D> {
    /// Create a machine in the initial Focus state
    ///
    /// Nothing is drawn until the first [`enter_phase`](Self::enter_phase).
    pub fn new(config: PomodoroConfig, display: D) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            state: SchedulerState::new(&config),
            buffer: DisplayBuffer::new(),
            display,
            display_desynced: false,
        })
    }

    /// Handle one elapsed second
    ///
    /// No-op while suspended. The transition check runs before the minute
    /// check, so a transition tick redraws the minutes line with the fresh
    /// phase's full duration.
    pub fn on_tick(&mut self) -> Events {
        let mut events = Events::new();
        if !self.state.running {
            return events;
        }

        self.state.elapsed_seconds = self.state.elapsed_seconds.saturating_add(1);

        if self.state.phase_complete() {
            let next = self
                .state
                .phase
                .next(self.state.completed_focus_cycles, self.config.cycle_threshold);
            self.enter_phase_into(next, &mut events);
        }

        if self.state.on_minute_boundary() {
            let minutes_left = self.state.minutes_left();
            self.minute_elapsed_into(minutes_left, &mut events);
        }

        events
    }

    /// Enter a phase and redraw its caption and tamagotchi
    ///
    /// A failed commit is reported as [`Event::DisplayFault`]; the phase
    /// change itself is never rolled back.
    pub fn enter_phase(&mut self, next: PomodoroPhase) -> Events {
        let mut events = Events::new();
        self.enter_phase_into(next, &mut events);
        events
    }

    /// Redraw only the minutes-left line
    pub fn on_minute_elapsed(&mut self, minutes_left: u16) -> Events {
        let mut events = Events::new();
        self.minute_elapsed_into(minutes_left, &mut events);
        events
    }

    /// Draw the suspended screen, then blank the panel
    pub fn show_suspended(&mut self) -> Events {
        let mut events = Events::new();
        self.state.busy = true;

        self.buffer.set_image(Tamagotchi::Empty);
        self.buffer.clear_text();
        self.buffer.clear_minutes_line();
        for line in SUSPENDED_CAPTION {
            self.buffer.draw_string(line);
        }
        self.commit(&mut events);

        if let Err(e) = self.display.fill_white() {
            self.display_desynced = true;
            let _ = events.push(Event::DisplayFault(e));
        }

        self.state.busy = false;
        events
    }

    /// Start or stop counting ticks
    pub fn set_running(&mut self, running: bool) {
        self.state.running = running;
    }

    /// Forget completed focus cycles
    pub fn reset_cycles(&mut self) {
        self.state.completed_focus_cycles = 0;
    }

    /// Get the scheduler record
    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    /// Get the current phase
    pub fn phase(&self) -> PomodoroPhase {
        self.state.phase
    }

    /// Get the active configuration
    pub fn config(&self) -> &PomodoroConfig {
        &self.config
    }

    /// Check if a display transaction is in progress
    pub fn is_busy(&self) -> bool {
        self.state.busy
    }

    /// Check if the panel may be out of step with the buffer
    pub fn display_desynced(&self) -> bool {
        self.display_desynced
    }

    /// Get the display buffer
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Get the display transport
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get the display transport mutably
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    #[cfg(test)]
    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.state.busy = busy;
    }

    fn enter_phase_into(&mut self, next: PomodoroPhase, events: &mut Events) {
        self.state.phase = next;
        self.state.elapsed_seconds = 0;
        self.state.phase_duration_minutes = self.config.duration_minutes(next);
        match next {
            PomodoroPhase::Focus => {
                self.state.completed_focus_cycles =
                    self.state.completed_focus_cycles.saturating_add(1);
            }
            PomodoroPhase::LongRest => self.state.completed_focus_cycles = 0,
            PomodoroPhase::ShortRest => {}
        }

        self.state.busy = true;
        self.buffer.set_image(next.tamagotchi());
        self.buffer.clear_text();
        self.buffer.clear_minutes_line();
        for line in next.caption() {
            self.buffer.draw_string(line);
        }
        let _ = events.push(Event::PhaseEntered(next));
        self.commit(events);
        self.state.busy = false;
    }

    fn minute_elapsed_into(&mut self, minutes_left: u16, events: &mut Events) {
        self.state.busy = true;
        self.buffer.clear_minutes_line();
        self.buffer.draw_minutes_left(minutes_left);
        let _ = events.push(Event::MinuteElapsed { minutes_left });
        self.commit(events);
        self.state.busy = false;
    }

    fn commit(&mut self, events: &mut Events) {
        match self.display.commit(&self.buffer.snapshot()) {
            Ok(()) => self.display_desynced = false,
            Err(e) => {
                self.display_desynced = true;
                let _ = events.push(Event::DisplayFault(e));
            }
        }
    }
}
