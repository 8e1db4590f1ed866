//! Tick source backed by the tick task

use core::sync::atomic::Ordering;

use embassy_time::Instant;
use pomogotchi_core::traits::TickSource;

use crate::channels::{TICKS_ENABLED, TICK_RESTART};

/// Handle the controller uses to start and stop the tick task
pub struct FirmwareTicks;

impl TickSource for FirmwareTicks {
    fn enable(&mut self) {
        TICKS_ENABLED.store(true, Ordering::Release);
        TICK_RESTART.signal(());
    }

    fn disable(&mut self) {
        TICKS_ENABLED.store(false, Ordering::Release);
    }

    fn is_enabled(&self) -> bool {
        TICKS_ENABLED.load(Ordering::Acquire)
    }

    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
