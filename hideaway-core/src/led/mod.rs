//! LED animation
//!
//! Two layers with separate cadences:
//!
//! | Layer      | Source                          | Cadence                 |
//! |------------|---------------------------------|-------------------------|
//! | Brightness | Actuator state and travel time  | Every LED update        |
//! | Sparkle    | Random per-pixel on/off pattern | `sparkle_update_ms`     |
//!
//! The strip is only written when the sparkle pattern was regenerated or
//! the brightness changed since the last write.

pub mod brightness;
pub mod engine;
pub mod sparkle;

pub use brightness::target_brightness;
pub use engine::{LedEngine, LedFrame};
pub use sparkle::{blank, sparkle};
