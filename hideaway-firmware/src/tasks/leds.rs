//! LED transmit task
//!
//! Waits for frames from the control task and clocks them out over PIO.
//! Frames published while a transfer is running are coalesced; only the
//! newest one is sent next.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;

use hideaway_core::config::PIXEL_COUNT;

use crate::channels::LED_FRAME;

/// LED strip task
#[embassy_executor::task]
pub async fn led_task(mut ws2812: PioWs2812<'static, PIO0, 0, PIXEL_COUNT>) {
    info!("LED task started ({} pixels)", PIXEL_COUNT);

    loop {
        let frame = LED_FRAME.wait().await;
        ws2812.write(&frame).await;
        trace!("LED frame sent");
    }
}
