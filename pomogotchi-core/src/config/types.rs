//! Configuration type definitions

use crate::state::PomodoroPhase;

/// Default focus duration (minutes)
pub const FOCUS_MINUTES: u16 = 25;

/// Default short rest duration (minutes)
pub const SHORT_REST_MINUTES: u16 = 5;

/// Default long rest duration (minutes)
pub const LONG_REST_MINUTES: u16 = 15;

/// Focus entries allowed before the next rest becomes a long rest
pub const CYCLE_THRESHOLD: u8 = 3;

/// Button edges closer than this to the last accepted edge are bounce
pub const DEBOUNCE_WINDOW_MS: u32 = 200;

/// Upper bound for the debounce window
///
/// A window longer than this would swallow deliberate double presses.
pub const MAX_DEBOUNCE_WINDOW_MS: u32 = 2_000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A phase was configured with a zero-minute duration
    ZeroDuration(PomodoroPhase),
    /// Debounce window exceeds [`MAX_DEBOUNCE_WINDOW_MS`]
    DebounceWindowTooLarge,
}

/// Timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PomodoroConfig {
    /// Focus duration (minutes)
    pub focus_minutes: u16,
    /// Short rest duration (minutes)
    pub short_rest_minutes: u16,
    /// Long rest duration (minutes)
    pub long_rest_minutes: u16,
    /// Focus entries before a long rest
    pub cycle_threshold: u8,
    /// Software debounce guard window (ms)
    pub debounce_window_ms: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            focus_minutes: FOCUS_MINUTES,
            short_rest_minutes: SHORT_REST_MINUTES,
            long_rest_minutes: LONG_REST_MINUTES,
            cycle_threshold: CYCLE_THRESHOLD,
            debounce_window_ms: DEBOUNCE_WINDOW_MS,
        }
    }
}

impl PomodoroConfig {
    /// Duration of a phase in minutes
    pub fn duration_minutes(&self, phase: PomodoroPhase) -> u16 {
        match phase {
            PomodoroPhase::Focus => self.focus_minutes,
            PomodoroPhase::ShortRest => self.short_rest_minutes,
            PomodoroPhase::LongRest => self.long_rest_minutes,
        }
    }

    /// Check the configuration before it drives the scheduler
    ///
    /// A zero duration would make a phase transition on every tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for phase in PomodoroPhase::ALL {
            if self.duration_minutes(phase) == 0 {
                return Err(ConfigError::ZeroDuration(phase));
            }
        }

        if self.debounce_window_ms > MAX_DEBOUNCE_WINDOW_MS {
            return Err(ConfigError::DebounceWindowTooLarge);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PomodoroConfig::default();
        assert_eq!(config.duration_minutes(PomodoroPhase::Focus), 25);
        assert_eq!(config.duration_minutes(PomodoroPhase::ShortRest), 5);
        assert_eq!(config.duration_minutes(PomodoroPhase::LongRest), 15);
        assert_eq!(config.cycle_threshold, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = PomodoroConfig {
            short_rest_minutes: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration(PomodoroPhase::ShortRest))
        );
    }

    #[test]
    fn test_zero_threshold_allowed() {
        // Every focus is then followed by a long rest
        let config = PomodoroConfig {
            cycle_threshold: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_debounce_window_bound() {
        let config = PomodoroConfig {
            debounce_window_ms: MAX_DEBOUNCE_WINDOW_MS + 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DebounceWindowTooLarge));
    }
}
