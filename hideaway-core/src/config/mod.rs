//! Configuration types
//!
//! All tunables are compile-time constants gathered in [`PropConfig`].
//! There is no runtime configuration surface.

pub mod types;

pub use types::*;
