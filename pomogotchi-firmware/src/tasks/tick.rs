//! One-second tick task
//!
//! Parked while ticks are disabled. Enabling restarts the period, so the
//! first tick after a resume lands one full second later.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use crate::channels::{TICKS_ENABLED, TICK_CHANNEL, TICK_RESTART};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - sends one tick per elapsed second while enabled
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    loop {
        TICK_RESTART.wait().await;
        let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

        loop {
            match select(ticker.next(), TICK_RESTART.wait()).await {
                Either::First(()) => {
                    if !TICKS_ENABLED.load(Ordering::Acquire) {
                        debug!("Ticks disabled, parking");
                        break;
                    }
                    if TICK_CHANNEL.try_send(()).is_err() {
                        warn!("Tick channel full, tick dropped");
                    }
                }
                Either::Second(()) => ticker.reset(),
            }
        }
    }
}
