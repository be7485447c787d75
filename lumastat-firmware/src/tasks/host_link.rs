//! Host link UART receive task
//!
//! Receives state lines from the LED controller and applies them to the
//! shared host state.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use lumastat_core::LineReader;

use crate::host;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Host link RX task - parses update lines from the controller
#[embassy_executor::task]
pub async fn host_link_task(mut rx: BufferedUartRx) {
    info!("Host link task started");

    let mut reader = LineReader::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match reader.feed(byte) {
                        Ok(Some(update)) => {
                            debug!("Host update: {}", Debug2Format(&update));
                            host::apply(update);
                        }
                        Ok(None) => {
                            // Line still incomplete
                        }
                        Err(e) => {
                            warn!("Host link line rejected: {}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
