//! Actuator state machine and control-loop events
//!
//! The actuator state is explicit, finite, and deterministic. Everything
//! the control loop does in a tick is reported as an [`Event`].

pub mod events;
pub mod machine;

pub use events::{Event, TickReport, MAX_TICK_EVENTS};
pub use machine::{ActuatorState, Direction, Position};
