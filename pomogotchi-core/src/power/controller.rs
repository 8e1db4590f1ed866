//! Run/suspend controller
//!
//! [`Pomodoro`] is the single owner of the timer: the phase machine, the
//! tick source and the debounce guard. The board feeds it ticks and button
//! edges one at a time, which gives the handlers mutual exclusion without a
//! lock.

use super::debounce::Debouncer;
use crate::config::{ConfigError, PomodoroConfig};
use crate::scheduler::{PhaseMachine, SchedulerState};
use crate::state::{append, Event, Events, PomodoroPhase, PowerEvent, RunState};
use crate::traits::{DisplayTransport, TickSource};

/// The Pomodoro timer
pub struct Pomodoro<D: DisplayTransport, T: TickSource> {
    /// Phase state machine (owns the display)
    machine: PhaseMachine<D>,
    /// One-second tick source
    ticks: T,
    /// Button debounce guard
    debounce: Debouncer,
    /// An accepted edge arrived during a display transaction
    pending_edge: bool,
}

impl<D: DisplayTransport, T: TickSource> Pomodoro<D, T> {
    /// Create a timer; call [`start`](Self::start) to begin the first focus
    pub fn new(config: PomodoroConfig, display: D, ticks: T) -> Result<Self, ConfigError> {
        let machine = PhaseMachine::new(config, display)?;

        Ok(Self {
            machine,
            ticks,
            debounce: Debouncer::new(config.debounce_window_ms),
            pending_edge: false,
        })
    }

    /// Start ticking and show the first focus phase
    pub fn start(&mut self) -> Events {
        self.ticks.enable();
        self.machine.set_running(true);
        self.enter_focus()
    }

    /// Handle one elapsed second
    ///
    /// An edge deferred during the tick's display work is applied afterwards.
    pub fn on_tick(&mut self) -> Events {
        let mut events = self.machine.on_tick();
        self.apply_pending_edge(&mut events);
        events
    }

    /// Handle a falling edge from the power button
    ///
    /// `edge_ms` is the tick source's millisecond counter sampled when the
    /// edge arrived, not when it is handled, so a bounce that queued up
    /// behind a slow panel commit still falls inside the debounce window.
    ///
    /// Edges inside the window are dropped. An accepted edge that arrives
    /// while the panel is busy is held until the transaction ends; a held
    /// edge is applied before the next edge or tick is handled.
    pub fn on_button_edge(&mut self, edge_ms: u32) -> Events {
        let mut events = Events::new();
        self.apply_pending_edge(&mut events);

        if !self.debounce.accept(edge_ms) {
            let _ = events.push(Event::EdgeIgnored);
            return events;
        }

        if self.machine.is_busy() {
            self.pending_edge = true;
            let _ = events.push(Event::EdgeDeferred);
            return events;
        }

        append(&mut events, self.toggle());
        events
    }

    /// Check if the idle/low-power path may run
    pub fn idle_permitted(&self) -> bool {
        !self.machine.is_busy()
    }

    /// Get the power state
    pub fn run_state(&self) -> RunState {
        RunState::from(self.machine.state().running)
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.run_state().is_running()
    }

    /// Check if an edge is waiting for the panel
    pub fn has_pending_edge(&self) -> bool {
        self.pending_edge
    }

    /// Get the scheduler record
    pub fn state(&self) -> &SchedulerState {
        self.machine.state()
    }

    /// Get the current phase
    pub fn phase(&self) -> PomodoroPhase {
        self.machine.phase()
    }

    /// Whole minutes left in the current phase
    pub fn minutes_left(&self) -> u16 {
        self.machine.state().minutes_left()
    }

    /// Check if the panel may be out of step with the buffer
    pub fn display_desynced(&self) -> bool {
        self.machine.display_desynced()
    }

    /// Get the phase machine
    pub fn machine(&self) -> &PhaseMachine<D> {
        &self.machine
    }

    /// Get the tick source
    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    #[cfg(test)]
    pub(crate) fn machine_mut(&mut self) -> &mut PhaseMachine<D> {
        &mut self.machine
    }

    #[cfg(test)]
    pub(crate) fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }

    fn apply_pending_edge(&mut self, events: &mut Events) {
        if self.pending_edge && !self.machine.is_busy() {
            self.pending_edge = false;
            append(events, self.toggle());
        }
    }

    fn toggle(&mut self) -> Events {
        match self.run_state().transition(PowerEvent::ButtonEdge) {
            RunState::Suspended => self.suspend(),
            RunState::Running => self.resume(),
        }
    }

    fn suspend(&mut self) -> Events {
        self.ticks.disable();
        self.machine.set_running(false);

        let mut events = Events::new();
        let _ = events.push(Event::Suspended);
        append(&mut events, self.machine.show_suspended());
        events
    }

    fn resume(&mut self) -> Events {
        self.machine.reset_cycles();
        self.ticks.enable();
        self.machine.set_running(true);

        let mut events = Events::new();
        let _ = events.push(Event::Resumed);
        append(&mut events, self.enter_focus());
        events
    }

    fn enter_focus(&mut self) -> Events {
        let mut events = self.machine.enter_phase(PomodoroPhase::Focus);
        let focus_minutes = self.machine.config().focus_minutes;
        append(&mut events, self.machine.on_minute_elapsed(focus_minutes));
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Tamagotchi;
    use crate::traits::mock::{MockDisplay, MockTicks};
    use proptest::prelude::*;

    fn pomodoro() -> Pomodoro<MockDisplay, MockTicks> {
        Pomodoro::new(PomodoroConfig::default(), MockDisplay::new(), MockTicks::new()).unwrap()
    }

    fn started() -> Pomodoro<MockDisplay, MockTicks> {
        let mut pomodoro = pomodoro();
        pomodoro.start();
        pomodoro
    }

    /// Press the button well outside the debounce window
    fn press(pomodoro: &mut Pomodoro<MockDisplay, MockTicks>) -> Events {
        pomodoro.ticks_mut().advance_ms(1_000);
        let now = pomodoro.ticks().now_ms();
        pomodoro.on_button_edge(now)
    }

    #[test]
    fn test_start_shows_focus_and_full_duration() {
        let mut pomodoro = pomodoro();
        let events = pomodoro.start();

        assert_eq!(
            events.as_slice(),
            &[
                Event::PhaseEntered(PomodoroPhase::Focus),
                Event::MinuteElapsed { minutes_left: 25 },
            ]
        );
        assert!(pomodoro.ticks().is_enabled());
        assert!(pomodoro.is_running());
        assert_eq!(pomodoro.minutes_left(), 25);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PomodoroConfig {
            long_rest_minutes: 0,
            ..Default::default()
        };
        let result = Pomodoro::new(config, MockDisplay::new(), MockTicks::new());
        assert!(matches!(
            result,
            Err(ConfigError::ZeroDuration(PomodoroPhase::LongRest))
        ));
    }

    #[test]
    fn test_press_suspends() {
        let mut pomodoro = started();
        for _ in 0..90 {
            pomodoro.on_tick();
        }

        let events = press(&mut pomodoro);
        assert_eq!(events.as_slice(), &[Event::Suspended]);
        assert_eq!(pomodoro.run_state(), RunState::Suspended);
        assert!(!pomodoro.ticks().is_enabled());
        assert_eq!(pomodoro.machine().buffer().image(), Tamagotchi::Empty);
        assert_eq!(pomodoro.machine().display().fills, 1);

        // Frozen while suspended
        let elapsed = pomodoro.state().elapsed_seconds;
        assert!(pomodoro.on_tick().is_empty());
        assert_eq!(pomodoro.state().elapsed_seconds, elapsed);
    }

    #[test]
    fn test_suspend_resume_round_trip() {
        let mut pomodoro = started();
        // Finish one focus to get into a rest with cycles counted
        for _ in 0..25 * 60 + 30 {
            pomodoro.on_tick();
        }
        assert_eq!(pomodoro.phase(), PomodoroPhase::ShortRest);

        press(&mut pomodoro);
        let events = press(&mut pomodoro);

        assert_eq!(
            events.as_slice(),
            &[
                Event::Resumed,
                Event::PhaseEntered(PomodoroPhase::Focus),
                Event::MinuteElapsed { minutes_left: 25 },
            ]
        );
        let state = pomodoro.state();
        assert_eq!(state.phase, PomodoroPhase::Focus);
        assert_eq!(state.elapsed_seconds, 0);
        // Counter was cleared to 0, then the resumed focus entry counted itself
        assert_eq!(state.completed_focus_cycles, 1);
        assert!(pomodoro.ticks().is_enabled());
        assert_eq!(pomodoro.ticks().enables, 2);
    }

    #[test]
    fn test_bounce_ignored() {
        let mut pomodoro = started();
        press(&mut pomodoro);

        pomodoro.ticks_mut().advance_ms(20);
        let now = pomodoro.ticks().now_ms();
        let events = pomodoro.on_button_edge(now);
        assert_eq!(events.as_slice(), &[Event::EdgeIgnored]);
        assert_eq!(pomodoro.run_state(), RunState::Suspended);
    }

    #[test]
    fn test_bounce_handled_late_still_ignored() {
        let mut pomodoro = started();
        let pressed_at = pomodoro.ticks().now_ms() + 1_000;
        pomodoro.ticks_mut().advance_ms(1_000);
        assert_eq!(pomodoro.on_button_edge(pressed_at).as_slice(), &[Event::Suspended]);

        // The bounce queued 3 ms after the press while the suspend screen
        // was being committed, and is only handled seconds later
        pomodoro.ticks_mut().advance_ms(3_000);
        let events = pomodoro.on_button_edge(pressed_at + 3);

        assert_eq!(events.as_slice(), &[Event::EdgeIgnored]);
        assert_eq!(pomodoro.run_state(), RunState::Suspended);
        assert!(!pomodoro.ticks().is_enabled());
    }

    #[test]
    fn test_edge_deferred_while_suspended_applied_on_next_edge() {
        let mut pomodoro = started();
        press(&mut pomodoro);
        assert_eq!(pomodoro.run_state(), RunState::Suspended);

        pomodoro.machine_mut().set_busy(true);
        assert_eq!(press(&mut pomodoro).as_slice(), &[Event::EdgeDeferred]);
        pomodoro.machine_mut().set_busy(false);

        // No ticks while suspended, so the next edge applies the held one first
        let events = press(&mut pomodoro);
        assert_eq!(
            events.as_slice(),
            &[
                Event::Resumed,
                Event::PhaseEntered(PomodoroPhase::Focus),
                Event::MinuteElapsed { minutes_left: 25 },
                Event::Suspended,
            ]
        );
        assert!(!pomodoro.has_pending_edge());
        assert_eq!(pomodoro.run_state(), RunState::Suspended);
    }

    #[test]
    fn test_edge_deferred_while_busy() {
        let mut pomodoro = started();
        pomodoro.machine_mut().set_busy(true);

        let events = press(&mut pomodoro);
        assert_eq!(events.as_slice(), &[Event::EdgeDeferred]);
        assert!(pomodoro.is_running());
        assert!(pomodoro.has_pending_edge());
        assert!(!pomodoro.idle_permitted());

        // Transaction ends; the next tick applies the edge
        pomodoro.machine_mut().set_busy(false);
        let events = pomodoro.on_tick();
        assert_eq!(events.as_slice(), &[Event::Suspended]);
        assert!(!pomodoro.has_pending_edge());
        assert_eq!(pomodoro.run_state(), RunState::Suspended);
        assert!(pomodoro.idle_permitted());
    }

    #[test]
    fn test_display_fault_keeps_timer_running() {
        let mut pomodoro = Pomodoro::new(
            PomodoroConfig::default(),
            MockDisplay::failing(crate::traits::TransportError::Bus),
            MockTicks::new(),
        )
        .unwrap();
        let events = pomodoro.start();

        assert_eq!(events.iter().filter(|e| e.is_error_event()).count(), 2);
        assert!(pomodoro.display_desynced());
        assert!(pomodoro.is_running());
        assert_eq!(pomodoro.phase(), PomodoroPhase::Focus);
    }

    proptest! {
        #[test]
        fn prop_accepted_presses_alternate(presses in 1usize..12) {
            let mut pomodoro = started();
            for n in 1..=presses {
                press(&mut pomodoro);
                let expect_running = n % 2 == 0;
                prop_assert_eq!(pomodoro.is_running(), expect_running);
                prop_assert_eq!(pomodoro.ticks().is_enabled(), expect_running);
            }
        }
    }
}
