//! Control task
//!
//! Runs the prop tick on a fixed-period ticker and logs what happened.
//! A tick never awaits, so a slow LED transmit cannot stretch it.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Instant, Ticker};
use rand::rngs::SmallRng;

use hideaway_core::state::Event;
use hideaway_core::Prop;
use hideaway_hal::{HalInput, HalOutput};

use crate::strip::SignalStrip;

/// The prop as wired on this board
pub type BoardProp =
    Prop<HalInput<Input<'static>>, HalOutput<Output<'static>>, SignalStrip, SmallRng>;

/// Control task - main coordination loop
#[embassy_executor::task]
pub async fn control_task(mut prop: BoardProp) {
    info!("Control task started");

    if let Err(e) = prop.boot() {
        warn!("Initial strip blank failed: {:?}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(prop.config().tick_ms));

    loop {
        let now_ms = Instant::now().as_millis();
        let report = prop.tick(now_ms);

        for event in report.iter() {
            log_event(event);
        }

        ticker.next().await;
    }
}

/// Faults warn, actuator and lock activity is info, LED traffic is debug
fn log_event(event: &Event) {
    if event.is_fault() {
        warn!("{:?}", event);
    } else if event.is_actuator_event() || event.is_lock_event() {
        info!("{:?}", event);
    } else {
        debug!("{:?}", event);
    }
}
