//! Linear actuator control
//!
//! - [`MotorBridge`]: the two direction lines of the motor driver
//! - [`ActuatorController`]: movement state, position tracking and the
//!   pending direction for the next press

pub mod bridge;
pub mod controller;

pub use bridge::MotorBridge;
pub use controller::ActuatorController;
