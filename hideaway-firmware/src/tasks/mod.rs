//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod control;
pub mod leds;

pub use control::control_task;
pub use leds::led_task;
