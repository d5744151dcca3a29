//! Pixel strip backed by the LED task
//!
//! Brightness is applied here, so the LED task only has to push bytes.

use hideaway_core::config::{PIXEL_COUNT, PIXEL_OFF};
use hideaway_hal::{scale_pixel, PixelStrip, StripError};
use rgb::RGB8;

use crate::channels::{WireFrame, LED_FRAME};

/// `PixelStrip` that hands frames to the LED task
pub struct SignalStrip;

impl PixelStrip for SignalStrip {
    fn len(&self) -> usize {
        PIXEL_COUNT
    }

    fn write(&mut self, pixels: &[RGB8], brightness: f32) -> Result<(), StripError> {
        if pixels.len() != PIXEL_COUNT {
            return Err(StripError::LengthMismatch);
        }

        let mut frame: WireFrame = [PIXEL_OFF; PIXEL_COUNT];
        for (out, px) in frame.iter_mut().zip(pixels) {
            *out = scale_pixel(*px, brightness);
        }
        LED_FRAME.signal(frame);
        Ok(())
    }
}
