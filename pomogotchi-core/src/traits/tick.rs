//! Tick source trait

/// Periodic one-second tick plus a free-running millisecond counter
///
/// While enabled the board calls the scheduler's `on_tick` once per elapsed
/// second. Enabling restarts the period, so the first tick arrives one full
/// second after `enable`.
pub trait TickSource {
    /// Start delivering ticks
    fn enable(&mut self);

    /// Stop delivering ticks
    fn disable(&mut self);

    /// Check if ticks are being delivered
    fn is_enabled(&self) -> bool;

    /// Milliseconds since boot, wrapping at `u32::MAX`
    ///
    /// Keeps counting while ticks are disabled.
    fn now_ms(&self) -> u32;
}
