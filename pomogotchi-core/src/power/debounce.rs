//! Software debounce guard for the power button

/// Rejects edges that follow an accepted edge too closely
///
/// Timestamps come from a wrapping millisecond counter, so the window is
/// measured with `wrapping_sub` and survives counter rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Guard window (ms)
    window_ms: u32,
    /// Time of the last accepted edge
    last_accepted_ms: Option<u32>,
}

impl Debouncer {
    /// Create a debouncer that has not seen an edge yet
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Decide whether an edge at `now_ms` counts as a press
    ///
    /// Rejected edges do not extend the window.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.wrapping_sub(last) < self.window_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_edge_accepted() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(0));
    }

    #[test]
    fn test_bounce_rejected() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(1_000));
        assert!(!debouncer.accept(1_005));
        assert!(!debouncer.accept(1_199));
        assert!(debouncer.accept(1_200));
    }

    #[test]
    fn test_rejected_edge_does_not_extend_window() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(0));
        assert!(!debouncer.accept(150));
        assert!(debouncer.accept(210));
    }

    #[test]
    fn test_counter_rollover() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(u32::MAX - 50));
        assert!(!debouncer.accept(100));
        assert!(debouncer.accept(150));
    }

    #[test]
    fn test_zero_window_accepts_everything() {
        let mut debouncer = Debouncer::new(0);
        assert!(debouncer.accept(7));
        assert!(debouncer.accept(7));
    }

    proptest! {
        #[test]
        fn prop_accepted_edges_are_spaced(
            start in any::<u32>(),
            gaps in proptest::collection::vec(0u32..500, 1..50),
        ) {
            let mut debouncer = Debouncer::new(200);
            let mut now = start;
            let mut last_accepted: Option<u32> = None;

            for gap in gaps {
                now = now.wrapping_add(gap);
                if debouncer.accept(now) {
                    if let Some(last) = last_accepted {
                        prop_assert!(now.wrapping_sub(last) >= 200);
                    }
                    last_accepted = Some(now);
                }
            }
        }
    }
}
