//! Host mocks for the collaborator traits

use super::{DisplayTransport, TickSource, TransportError};
use crate::display::{Snapshot, HALF_BYTES, WHITE};

/// Records what was committed and can be told to fail
pub struct MockDisplay {
    pub commits: u32,
    pub fills: u32,
    pub fail_with: Option<TransportError>,
    pub last_text: [u8; HALF_BYTES],
    pub last_image: Option<&'static [u8]>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            commits: 0,
            fills: 0,
            fail_with: None,
            last_text: [WHITE; HALF_BYTES],
            last_image: None,
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::new()
        }
    }
}

impl DisplayTransport for MockDisplay {
    fn commit(&mut self, frame: &Snapshot<'_>) -> Result<(), TransportError> {
        self.commits += 1;
        if let Some(error) = self.fail_with {
            return Err(error);
        }
        self.last_text.copy_from_slice(frame.text());
        self.last_image = Some(frame.image());
        Ok(())
    }

    fn fill_white(&mut self) -> Result<(), TransportError> {
        self.fills += 1;
        match self.fail_with {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Tick source with a hand-driven millisecond clock
pub struct MockTicks {
    pub enabled: bool,
    pub now_ms: u32,
    pub enables: u32,
}

impl MockTicks {
    pub fn new() -> Self {
        Self {
            enabled: false,
            now_ms: 0,
            enables: 0,
        }
    }

    pub fn advance_ms(&mut self, ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(ms);
    }
}

impl TickSource for MockTicks {
    fn enable(&mut self) {
        self.enabled = true;
        self.enables += 1;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn now_ms(&self) -> u32 {
        self.now_ms
    }
}
