//! Simulated prop wiring for host tests
//!
//! Pins share their level through `Rc<Cell<bool>>` so tests can flip
//! switches and observe outputs while the controller owns the pins.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hideaway_core::{Prop, PropConfig, PropPins};
use hideaway_core::state::TickReport;
use hideaway_hal::{InputPin, OutputPin, PixelStrip, StripError};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rgb::RGB8;

pub const TICK_MS: u64 = 10;

pub type Line = Rc<Cell<bool>>;

/// Switch input (true = high = released)
pub struct SimInput(pub Line);

impl InputPin for SimInput {
    fn is_high(&mut self) -> bool {
        self.0.get()
    }
}

/// Output line that panics if it is asserted while its partner is
pub struct SimOutput {
    line: Line,
    partner: Option<Line>,
}

impl OutputPin for SimOutput {
    fn set_high(&mut self) {
        if let Some(partner) = &self.partner {
            assert!(!partner.get(), "motor bridge shorted");
        }
        self.line.set(true);
    }

    fn set_low(&mut self) {
        self.line.set(false);
    }

    fn is_set_high(&self) -> bool {
        self.line.get()
    }
}

/// Frame written to the strip
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub pixels: Vec<RGB8>,
    pub brightness: f32,
}

/// Strip that logs every frame
pub struct SimStrip(pub Rc<RefCell<Vec<Written>>>);

impl PixelStrip for SimStrip {
    fn len(&self) -> usize {
        hideaway_core::config::PIXEL_COUNT
    }

    fn write(&mut self, pixels: &[RGB8], brightness: f32) -> Result<(), StripError> {
        if pixels.len() != self.len() {
            return Err(StripError::LengthMismatch);
        }
        self.0.borrow_mut().push(Written {
            pixels: pixels.to_vec(),
            brightness,
        });
        Ok(())
    }
}

pub type SimProp = Prop<SimInput, SimOutput, SimStrip, SmallRng>;

/// Which switch to operate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    Main,
    A,
    B,
}

/// A prop wired to simulated pins, with its own clock
pub struct Rig {
    pub prop: SimProp,
    pub main: Line,
    pub secret_a: Line,
    pub secret_b: Line,
    pub motor_up: Line,
    pub motor_down: Line,
    pub lock: Line,
    pub frames: Rc<RefCell<Vec<Written>>>,
    pub now_ms: u64,
}

fn line(level: bool) -> Line {
    Rc::new(Cell::new(level))
}

impl Rig {
    pub fn new() -> Self {
        Self::with_config(PropConfig::DEFAULT, 7)
    }

    pub fn with_config(config: PropConfig, seed: u64) -> Self {
        let (main, secret_a, secret_b) = (line(true), line(true), line(true));
        let (motor_up, motor_down, lock) = (line(false), line(false), line(false));
        let frames = Rc::new(RefCell::new(Vec::new()));

        let pins = PropPins {
            main_switch: SimInput(main.clone()),
            secret_a: SimInput(secret_a.clone()),
            secret_b: SimInput(secret_b.clone()),
            motor_up: SimOutput {
                line: motor_up.clone(),
                partner: Some(motor_down.clone()),
            },
            motor_down: SimOutput {
                line: motor_down.clone(),
                partner: Some(motor_up.clone()),
            },
            lock: SimOutput {
                line: lock.clone(),
                partner: None,
            },
        };

        let mut prop = Prop::new(
            config,
            pins,
            SimStrip(frames.clone()),
            SmallRng::seed_from_u64(seed),
        );
        prop.boot().expect("boot flush");

        Self {
            prop,
            main,
            secret_a,
            secret_b,
            motor_up,
            motor_down,
            lock,
            frames,
            now_ms: 0,
        }
    }

    fn switch_line(&self, switch: Switch) -> &Line {
        match switch {
            Switch::Main => &self.main,
            Switch::A => &self.secret_a,
            Switch::B => &self.secret_b,
        }
    }

    /// Hold a switch down (active-low)
    pub fn press(&self, switch: Switch) {
        self.switch_line(switch).set(false);
    }

    /// Let a switch go
    pub fn release(&self, switch: Switch) {
        self.switch_line(switch).set(true);
    }

    /// Run one tick at the current time, then advance the clock
    pub fn step(&mut self) -> TickReport {
        let report = self.prop.tick(self.now_ms);
        self.now_ms += TICK_MS;
        report
    }

    /// Run ticks until the clock reaches `until_ms` (exclusive),
    /// collecting every report
    pub fn run_until(&mut self, until_ms: u64) -> Vec<TickReport> {
        let mut reports = Vec::new();
        while self.now_ms < until_ms {
            reports.push(self.step());
        }
        reports
    }

    /// Press at the current time for one tick, then release for one tick
    ///
    /// Returns the report of the press tick.
    pub fn tap(&mut self, switch: Switch) -> TickReport {
        self.press(switch);
        let report = self.step();
        self.release(switch);
        self.step();
        report
    }

    /// Advance to `at_ms` and tap there
    pub fn tap_at(&mut self, switch: Switch, at_ms: u64) -> TickReport {
        self.run_until(at_ms);
        self.tap(switch)
    }

    pub fn motors(&self) -> (bool, bool) {
        (self.motor_up.get(), self.motor_down.get())
    }
}
