//! Addressable LED strip abstraction
//!
//! The strip is written as a whole frame: every pixel colour plus one
//! global brightness scalar. How the bytes reach the LEDs (PIO, SPI, bit
//! banging) is up to the implementation.

use rgb::RGB8;

/// Errors that can occur when pushing a frame to the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// Frame length does not match the strip length
    LengthMismatch,
    /// Transmission to the strip failed
    WriteFailed,
}

/// Addressable RGB pixel strip (WS2812/NeoPixel)
pub trait PixelStrip {
    /// Number of pixels on the strip
    fn len(&self) -> usize;

    /// Whether the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display a full frame
    ///
    /// `brightness` is a scalar in `0.0..=1.0` applied to every pixel.
    /// Implementations should use [`scale_pixel`] so all backends dim
    /// identically.
    fn write(&mut self, pixels: &[RGB8], brightness: f32) -> Result<(), StripError>;
}

/// Scale a pixel colour by a brightness factor
///
/// Brightness outside `0.0..=1.0` is clamped. Channels are truncated,
/// matching the usual NeoPixel driver behaviour.
pub fn scale_pixel(pixel: RGB8, brightness: f32) -> RGB8 {
    let b = brightness.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * b) as u8;
    RGB8 {
        r: scale(pixel.r),
        g: scale(pixel.g),
        b: scale(pixel.b),
    }
}
