//! Secret knock detection
//!
//! Presses on the two hidden switches are buffered with timestamps and
//! scanned for the target order. A match opens the lock.

pub mod buffer;
pub mod detector;

pub use buffer::{PressEvent, SequenceBuffer};
pub use detector::{SequenceDetector, SequenceMatch};

/// Hidden switch identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SecretSwitch {
    A,
    B,
}
