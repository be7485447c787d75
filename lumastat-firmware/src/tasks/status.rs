//! Host-loop task driving the status display
//!
//! Runs far more often than the refresh interval; the display's scheduler
//! throttles itself, so most iterations return without reading host state.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use crate::board::Screen;
use crate::host::{self, NETWORK_UP};
use crate::names::NAMES;

/// Host main-loop period in milliseconds
pub const HOST_LOOP_INTERVAL_MS: u64 = 50;

/// Status display task - calls the display once per host-loop iteration
#[embassy_executor::task]
pub async fn status_task(mut screen: Screen) {
    info!("Status task started");

    screen.setup();

    let mut ticker = Ticker::every(Duration::from_millis(HOST_LOOP_INTERVAL_MS));

    loop {
        ticker.next().await;

        let live = host::current();

        if NETWORK_UP.try_take().is_some() {
            screen.on_connected(&live);
        }

        // Millisecond counter wraps after ~49 days; the scheduler is wrap-safe
        let now_ms = Instant::now().as_millis() as u32;
        screen.on_loop(now_ms, &live, &NAMES);
    }
}
