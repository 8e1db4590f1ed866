//! Display transport trait for the e-paper panel

use crate::display::Snapshot;

/// Errors that can occur while committing to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Panel kept BUSY asserted past the configured wait
    Timeout,
    /// SPI transfer failed
    Bus,
}

/// Trait for committing the display buffer to the physical panel
///
/// Calls block until the panel has finished refreshing or the
/// implementation's busy-wait bound expires. Implementations are not
/// re-entrant: the caller owns the panel for the whole call.
pub trait DisplayTransport {
    /// Write both halves of `frame` to panel RAM and refresh
    ///
    /// On `Ok` the panel shows exactly `frame`.
    fn commit(&mut self, frame: &Snapshot<'_>) -> Result<(), TransportError>;

    /// Fill the whole panel white and refresh
    fn fill_white(&mut self) -> Result<(), TransportError>;
}
