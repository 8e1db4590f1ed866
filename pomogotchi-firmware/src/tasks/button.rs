//! Power button task
//!
//! Forwards every falling edge stamped with its arrival time; debounce
//! happens in the controller against that stamp.

use defmt::*;
use embassy_stm32::exti::ExtiInput;
use pomogotchi_core::traits::TickSource;

use crate::channels::BUTTON_EDGES;
use crate::ticks::FirmwareTicks;

/// Button task - waits for presses on the user button
#[embassy_executor::task]
pub async fn button_task(mut button: ExtiInput<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;
        let edge_ms = FirmwareTicks.now_ms();
        if BUTTON_EDGES.try_send(edge_ms).is_err() {
            trace!("Button edge queue full");
        }
    }
}
