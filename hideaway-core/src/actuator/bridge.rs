//! Dual-direction motor bridge (L298N style)
//!
//! The bridge has one enable line per direction. Both lines asserted at
//! once shorts the supply through the bridge, so the lines are private
//! and only reachable through [`MotorBridge::drive`], which always
//! releases the opposite line before asserting the requested one.

use hideaway_hal::OutputPin;

use crate::state::Direction;

/// Motor bridge with mutually exclusive direction lines
pub struct MotorBridge<O> {
    up: O,
    down: O,
}

impl<O: OutputPin> MotorBridge<O> {
    /// Take ownership of the direction lines and release both
    pub fn new(up: O, down: O) -> Self {
        let mut bridge = Self { up, down };
        bridge.drive(None);
        bridge
    }

    /// Drive the motor in a direction, or release it with `None`
    pub fn drive(&mut self, direction: Option<Direction>) {
        match direction {
            Some(Direction::Up) => {
                self.down.set_low();
                self.up.set_high();
            }
            Some(Direction::Down) => {
                self.up.set_low();
                self.down.set_high();
            }
            None => {
                self.up.set_low();
                self.down.set_low();
            }
        }
    }

    /// Release both lines
    pub fn release(&mut self) {
        self.drive(None);
    }

    /// Check if the up line is asserted
    pub fn up_asserted(&self) -> bool {
        self.up.is_set_high()
    }

    /// Check if the down line is asserted
    pub fn down_asserted(&self) -> bool {
        self.down.is_set_high()
    }

    /// Direction currently driven, read back from the lines
    pub fn driving(&self) -> Option<Direction> {
        match (self.up_asserted(), self.down_asserted()) {
            (true, false) => Some(Direction::Up),
            (false, true) => Some(Direction::Down),
            _ => None,
        }
    }
}
