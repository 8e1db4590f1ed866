//! Controller loop
//!
//! Owns the [`Pomodoro`] and feeds it ticks and button edges one at a time.
//! Runs on the main task because the timer is generic over the board's
//! panel type.

use defmt::*;
use embassy_futures::select::{select, Either};

use pomogotchi_core::state::Event;
use pomogotchi_core::traits::{DisplayTransport, TickSource};
use pomogotchi_core::Pomodoro;

use crate::channels::{BUTTON_EDGES, TICK_CHANNEL};

/// Start the timer and process events forever
pub async fn run<D, T>(pomodoro: &mut Pomodoro<D, T>)
where
    D: DisplayTransport,
    T: TickSource,
{
    info!("Controller started");
    log_events(&pomodoro.start());

    loop {
        // Suspended: only the button can wake us
        let events = if pomodoro.is_running() {
            match select(TICK_CHANNEL.receive(), BUTTON_EDGES.receive()).await {
                Either::First(()) => pomodoro.on_tick(),
                Either::Second(edge_ms) => pomodoro.on_button_edge(edge_ms),
            }
        } else {
            let edge_ms = BUTTON_EDGES.receive().await;
            pomodoro.on_button_edge(edge_ms)
        };

        if events.contains(&Event::Resumed) {
            // Ticks queued before the suspend belong to the old phase
            TICK_CHANNEL.clear();
        }

        log_events(&events);

        if !pomodoro.idle_permitted() {
            warn!("Display transaction still open after handler");
        }
    }
}

fn log_events(events: &[Event]) {
    for event in events {
        match event {
            Event::PhaseEntered(phase) => info!("Entered {}", phase),
            Event::MinuteElapsed { minutes_left } => debug!("{} min left", minutes_left),
            Event::Suspended => info!("Suspended"),
            Event::Resumed => info!("Resumed"),
            Event::EdgeIgnored => trace!("Button bounce ignored"),
            Event::EdgeDeferred => debug!("Button edge deferred until panel idle"),
            Event::DisplayFault(e) => warn!("Panel commit failed: {}", e),
        }
    }
}
