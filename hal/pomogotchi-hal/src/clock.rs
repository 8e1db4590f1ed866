//! Time source abstractions
//!
//! A free-running millisecond counter plus a blocking delay. Used for reset
//! pulse timing and for bounding busy-waits on slow peripherals.

/// Millisecond clock with blocking delay
pub trait Clock {
    /// Milliseconds since an arbitrary epoch, wrapping at `u32::MAX`
    fn now_ms(&self) -> u32;

    /// Block the caller for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Milliseconds elapsed since `since`, tolerant of counter wrap
    fn elapsed_since(&self, since: u32) -> u32 {
        self.now_ms().wrapping_sub(since)
    }
}
