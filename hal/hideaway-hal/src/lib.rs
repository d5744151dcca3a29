//! Hideaway Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the prop core drives. Any chip
//! HAL can plug in, either by implementing the traits directly or through
//! the [`adapter`] wrappers around `embedded-hal` 1.0 pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (hideaway-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hideaway-core (control logic)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hideaway-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal 1.0 / embassy-rp          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`strip::PixelStrip`] - Addressable LED strip

#![no_std]
#![deny(unsafe_code)]

pub mod adapter;
pub mod gpio;
pub mod strip;

// Re-export key traits at crate root for convenience
pub use adapter::{HalInput, HalOutput};
pub use gpio::{InputPin, OutputPin};
pub use strip::{scale_pixel, PixelStrip, StripError};
