//! Pomodoro phase definition
//!
//! The phase cycle is Focus, then a rest, then Focus again. Whether the rest
//! is short or long depends on how many focus phases have been entered since
//! the last long rest.

use crate::display::Tamagotchi;

/// Pomodoro phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PomodoroPhase {
    /// Working period
    Focus,
    /// Break after a focus period
    ShortRest,
    /// Break after `cycle_threshold + 1` focus periods
    LongRest,
}

impl PomodoroPhase {
    /// All phases, in cycle order
    pub const ALL: [PomodoroPhase; 3] = [
        PomodoroPhase::Focus,
        PomodoroPhase::ShortRest,
        PomodoroPhase::LongRest,
    ];

    /// Phase that follows this one
    ///
    /// - `focus_cycles`: focus entries counted since the last long rest
    /// - `cycle_threshold`: focus entries allowed before a long rest
    pub fn next(self, focus_cycles: u8, cycle_threshold: u8) -> Self {
        match self {
            PomodoroPhase::Focus if focus_cycles <= cycle_threshold => PomodoroPhase::ShortRest,
            PomodoroPhase::Focus => PomodoroPhase::LongRest,
            PomodoroPhase::ShortRest | PomodoroPhase::LongRest => PomodoroPhase::Focus,
        }
    }

    /// Caption lines drawn in the text region on phase entry
    pub fn caption(&self) -> &'static [&'static str] {
        match self {
            PomodoroPhase::Focus => &[" FOCUS"],
            PomodoroPhase::ShortRest => &[" SHORT", "  REST"],
            PomodoroPhase::LongRest => &[" LONG", "  REST"],
        }
    }

    /// Tamagotchi shown in the image region during this phase
    pub fn tamagotchi(&self) -> Tamagotchi {
        match self {
            PomodoroPhase::Focus => Tamagotchi::Focused,
            PomodoroPhase::ShortRest => Tamagotchi::Drinking,
            PomodoroPhase::LongRest => Tamagotchi::Sleeping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_to_short_rest_until_threshold() {
        for cycles in 0..=3 {
            assert_eq!(
                PomodoroPhase::Focus.next(cycles, 3),
                PomodoroPhase::ShortRest
            );
        }
    }

    #[test]
    fn test_focus_to_long_rest_past_threshold() {
        assert_eq!(PomodoroPhase::Focus.next(4, 3), PomodoroPhase::LongRest);
        assert_eq!(PomodoroPhase::Focus.next(200, 3), PomodoroPhase::LongRest);
    }

    #[test]
    fn test_rests_return_to_focus() {
        assert_eq!(PomodoroPhase::ShortRest.next(2, 3), PomodoroPhase::Focus);
        assert_eq!(PomodoroPhase::LongRest.next(0, 3), PomodoroPhase::Focus);
    }

    #[test]
    fn test_captions_fit_one_row() {
        use crate::display::CHARS_PER_ROW;

        for phase in PomodoroPhase::ALL {
            for line in phase.caption() {
                assert!(line.len() <= CHARS_PER_ROW);
            }
        }
    }
}
