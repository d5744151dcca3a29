//! Board-agnostic core logic for the hideaway prop firmware
//!
//! This crate contains all control logic that does not depend on a
//! specific chip:
//!
//! - Switch sampling and edge detection
//! - Actuator state machine and motor bridge interlock
//! - Secret sequence detection
//! - Timed lock output
//! - LED brightness ramp and sparkle animation
//! - The controller that runs them in a fixed order every tick
//! - Configuration constants

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod config;
pub mod controller;
pub mod input;
pub mod led;
pub mod lock;
pub mod sequence;
pub mod state;

pub use config::PropConfig;
pub use controller::{Prop, PropPins};
