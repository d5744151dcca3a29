//! Hideaway - Concealed Panel Prop Firmware
//!
//! Board binary for RP2040. All prop behaviour lives in `hideaway-core`;
//! this crate wires the pins, runs the control loop on an embassy ticker
//! and streams LED frames out through PIO.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use {defmt_rtt as _, panic_probe as _};

use hideaway_core::{Prop, PropConfig, PropPins};
use hideaway_hal::{HalInput, HalOutput};

use crate::strip::SignalStrip;

mod channels;
mod strip;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Prop tuning, fixed at build time
const CONFIG: PropConfig = PropConfig::DEFAULT;

const _: () = assert!(CONFIG.validate().is_ok(), "invalid prop configuration");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hideaway firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Switches are wired to ground; pull-ups make them active-low
    // Pins: main GPIO5, secret A GPIO26, secret B GPIO4
    let main_switch = HalInput::new(Input::new(p.PIN_5, Pull::Up));
    let secret_a = HalInput::new(Input::new(p.PIN_26, Pull::Up));
    let secret_b = HalInput::new(Input::new(p.PIN_4, Pull::Up));

    // Outputs start deasserted. Pins: up GPIO3, down GPIO21, lock GPIO2
    let motor_up = HalOutput::new(Output::new(p.PIN_3, Level::Low));
    let motor_down = HalOutput::new(Output::new(p.PIN_21, Level::Low));
    let lock = HalOutput::new(Output::new(p.PIN_2, Level::Low));

    // WS2812 strip on GPIO16, PIO0 state machine 0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program);
    info!("PIO WS2812 initialized");

    // Sparkle only needs to look random; the ring oscillator is enough
    let seed = RoscRng.next_u64();
    debug!("Sparkle seed: {=u64:x}", seed);

    let pins = PropPins {
        main_switch,
        secret_a,
        secret_b,
        motor_up,
        motor_down,
        lock,
    };
    let prop = Prop::new(CONFIG, pins, SignalStrip, SmallRng::seed_from_u64(seed));
    info!(
        "Prop ready: travel {}ms, lock pulse {}ms, tick {}ms",
        CONFIG.movement_ms, CONFIG.lock_open_ms, CONFIG.tick_ms
    );

    spawner.spawn(tasks::led_task(ws2812)).unwrap();
    spawner.spawn(tasks::control_task(prop)).unwrap();

    info!("All tasks spawned, firmware running");
}
