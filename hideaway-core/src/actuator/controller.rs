//! Actuator movement controller
//!
//! A main-switch press either starts a movement in the pending direction
//! or, while moving, stops immediately. Every movement is time bounded:
//! it ends by natural completion after the configured travel time or by
//! an emergency stop, and both paths go through [`ActuatorController::stop`].
//!
//! After any movement ends the pending direction is the reverse of the
//! direction just travelled, so presses alternate up and down.

use hideaway_hal::OutputPin;

use super::bridge::MotorBridge;
use crate::state::{ActuatorState, Direction, Event, Position};

/// Actuator controller state
pub struct ActuatorController<O> {
    bridge: MotorBridge<O>,
    state: ActuatorState,
    position: Position,
    pending: Direction,
    movement_ms: u64,
}

impl<O: OutputPin> ActuatorController<O> {
    /// Create a controller at the boot defaults (idle, bottom, pending up)
    pub fn new(bridge: MotorBridge<O>, movement_ms: u64) -> Self {
        Self {
            bridge,
            state: ActuatorState::Idle,
            position: Position::Bottom,
            pending: Direction::Up,
            movement_ms,
        }
    }

    /// Current actuator state
    pub fn state(&self) -> ActuatorState {
        self.state
    }

    /// Last known resting position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Direction the next press will move in
    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Motor bridge (read-only)
    pub fn bridge(&self) -> &MotorBridge<O> {
        &self.bridge
    }

    /// Handle a main-switch press
    pub fn on_trigger(&mut self, now_ms: u64) -> Event {
        match self.state.direction() {
            None => {
                let direction = self.pending;
                self.start(direction, now_ms);
                Event::MovementStarted(direction)
            }
            Some(interrupted) => {
                self.stop();
                self.pending = interrupted.opposite();
                Event::EmergencyStop {
                    interrupted,
                    position: self.position,
                }
            }
        }
    }

    /// Stop the movement once the travel time has elapsed
    pub fn tick(&mut self, now_ms: u64) -> Option<Event> {
        debug_assert_eq!(self.bridge.driving(), self.state.direction());

        if !self.state.travel_complete(now_ms, self.movement_ms) {
            return None;
        }

        let direction = self.state.direction()?;
        self.pending = direction.opposite();
        self.stop();
        Some(Event::MovementCompleted {
            direction,
            position: self.position,
        })
    }

    /// Release the motor and go idle
    ///
    /// The position becomes the destination of the direction that was
    /// active, whether or not the travel time ran out. Returns that
    /// direction, or `None` if the actuator was already idle.
    pub fn stop(&mut self) -> Option<Direction> {
        self.bridge.release();
        let direction = self.state.direction();
        if let Some(direction) = direction {
            self.position = direction.destination();
        }
        self.state = ActuatorState::Idle;
        direction
    }

    fn start(&mut self, direction: Direction, now_ms: u64) {
        self.bridge.drive(Some(direction));
        self.state = ActuatorState::moving(direction, now_ms);
    }
}
