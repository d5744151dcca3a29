//! Main controller coordinating the prop
//!
//! The controller owns every piece of runtime state and runs one tick at
//! a time against a single time sample. Within a tick the order is fixed:
//!
//! 1. Sample switches
//! 2. Secret sequence detection (may unlock)
//! 3. Lock timing and output
//! 4. Main switch dispatch to the actuator
//! 5. Movement completion check
//! 6. LED update, if the brightness interval has passed
//! 7. Store the switch sample for the next tick's edge detection
//!
//! Pacing between ticks belongs to the caller.

use hideaway_hal::{InputPin, OutputPin, PixelStrip, StripError};
use rand_core::RngCore;

use crate::actuator::{ActuatorController, MotorBridge};
use crate::config::PropConfig;
use crate::input::InputReader;
use crate::led::LedEngine;
use crate::lock::LockController;
use crate::sequence::SequenceDetector;
use crate::state::{Event, TickReport};

/// Pins wired to the prop
pub struct PropPins<I, O> {
    pub main_switch: I,
    pub secret_a: I,
    pub secret_b: I,
    pub motor_up: O,
    pub motor_down: O,
    pub lock: O,
}

/// Prop controller
pub struct Prop<I, O, S, R> {
    config: PropConfig,
    inputs: InputReader<I>,
    sequence: SequenceDetector,
    lock: LockController<O>,
    actuator: ActuatorController<O>,
    leds: LedEngine<S>,
    rng: R,
    last_led_update_ms: Option<u64>,
}

impl<I, O, S, R> Prop<I, O, S, R>
where
    I: InputPin,
    O: OutputPin,
    S: PixelStrip,
    R: RngCore,
{
    /// Take ownership of the hardware and drive every output to its safe
    /// state
    pub fn new(config: PropConfig, pins: PropPins<I, O>, strip: S, rng: R) -> Self {
        let PropPins {
            main_switch,
            secret_a,
            secret_b,
            motor_up,
            motor_down,
            lock,
        } = pins;

        Self {
            inputs: InputReader::new(main_switch, secret_a, secret_b),
            sequence: SequenceDetector::new(&config),
            lock: LockController::new(lock, config.lock_open_ms),
            actuator: ActuatorController::new(
                MotorBridge::new(motor_up, motor_down),
                config.movement_ms,
            ),
            leds: LedEngine::new(strip, &config),
            rng,
            last_led_update_ms: None,
            config,
        }
    }

    /// Blank the LED strip
    pub fn boot(&mut self) -> Result<(), StripError> {
        self.leds.boot()
    }

    /// Active configuration
    pub fn config(&self) -> &PropConfig {
        &self.config
    }

    /// Actuator controller (read-only)
    pub fn actuator(&self) -> &ActuatorController<O> {
        &self.actuator
    }

    /// Lock controller (read-only)
    pub fn lock(&self) -> &LockController<O> {
        &self.lock
    }

    /// LED engine (read-only)
    pub fn leds(&self) -> &LedEngine<S> {
        &self.leds
    }

    /// Secret sequence detector (read-only)
    pub fn sequence(&self) -> &SequenceDetector {
        &self.sequence
    }

    /// Run one control tick at `now_ms`
    pub fn tick(&mut self, now_ms: u64) -> TickReport {
        let mut report = TickReport::new();

        let levels = self.inputs.sample();
        let edges = self.inputs.edges(&levels);

        if let Some(matched) = self.sequence.update(now_ms, &edges) {
            let _ = report.push(Event::SequenceMatched {
                span_ms: matched.span_ms(),
            });
            let _ = report.push(self.lock.unlock(now_ms));
        }

        if let Some(event) = self.lock.tick(now_ms) {
            let _ = report.push(event);
        }

        if edges.main {
            let _ = report.push(self.actuator.on_trigger(now_ms));
        }

        if let Some(event) = self.actuator.tick(now_ms) {
            let _ = report.push(event);
        }

        if self.led_update_due(now_ms) {
            let state = self.actuator.state();
            let position = self.actuator.position();
            if let Some(event) = self.leds.tick(now_ms, &state, position, &mut self.rng) {
                let _ = report.push(event);
            }
            self.last_led_update_ms = Some(now_ms);
        }

        self.inputs.commit(levels);
        report
    }

    fn led_update_due(&self, now_ms: u64) -> bool {
        self.last_led_update_ms.map_or(true, |last| {
            now_ms.saturating_sub(last) >= self.config.brightness_update_ms
        })
    }
}
