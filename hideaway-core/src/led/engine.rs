//! LED animation engine
//!
//! Owns the strip and the frame shown on it. Each call to
//! [`LedEngine::tick`] recomputes brightness, regenerates the sparkle
//! pattern when its interval has passed, and writes the whole frame only
//! if something visible changed.

use hideaway_hal::{PixelStrip, StripError};
use rand_core::RngCore;
use rgb::RGB8;

use super::brightness::target_brightness;
use super::sparkle::{blank, sparkle};
use crate::config::{PropConfig, PIXEL_COUNT, PIXEL_OFF};
use crate::state::{ActuatorState, Event, Position};

/// Full strip contents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedFrame {
    /// Global brightness scalar
    pub brightness: f32,
    /// Per-pixel colour
    pub pixels: [RGB8; PIXEL_COUNT],
}

impl LedFrame {
    /// All pixels off at the given brightness
    pub const fn dark(brightness: f32) -> Self {
        Self {
            brightness,
            pixels: [PIXEL_OFF; PIXEL_COUNT],
        }
    }

    /// Number of lit pixels
    #[cfg(test)]
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p != PIXEL_OFF).count()
    }
}

/// Brightness as thousandths, for logging
fn permille(brightness: f32) -> u16 {
    (brightness * 1000.0 + 0.5) as u16
}

/// LED animation engine state
pub struct LedEngine<S> {
    strip: S,
    frame: LedFrame,
    config: PropConfig,
    /// Brightness of the last successful write
    flushed_brightness: Option<f32>,
    /// Time of the last sparkle regeneration
    last_sparkle_ms: Option<u64>,
}

impl<S: PixelStrip> LedEngine<S> {
    /// Create an engine with a dark frame at minimum brightness
    pub fn new(strip: S, config: &PropConfig) -> Self {
        Self {
            strip,
            frame: LedFrame::dark(config.min_brightness),
            config: *config,
            flushed_brightness: None,
            last_sparkle_ms: None,
        }
    }

    /// Frame currently held by the engine
    pub fn frame(&self) -> &LedFrame {
        &self.frame
    }

    /// Strip (read-only)
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Turn the strip off at boot
    ///
    /// Fails without writing if the strip is not `PIXEL_COUNT` long.
    pub fn boot(&mut self) -> Result<(), StripError> {
        if self.strip.len() != PIXEL_COUNT {
            return Err(StripError::LengthMismatch);
        }
        self.frame = LedFrame::dark(self.config.min_brightness);
        self.flush()
    }

    /// Run one animation update
    ///
    /// Returns the flush or fault event, or `None` when nothing changed.
    pub fn tick<R: RngCore>(
        &mut self,
        now_ms: u64,
        state: &ActuatorState,
        position: Position,
        rng: &mut R,
    ) -> Option<Event> {
        self.frame.brightness = target_brightness(state, position, now_ms, &self.config);

        let sparkle_due = self
            .last_sparkle_ms
            .map_or(true, |last| {
                now_ms.saturating_sub(last) >= self.config.sparkle_update_ms
            });
        if sparkle_due {
            let at_rest_bottom = !state.is_moving() && position == Position::Bottom;
            if at_rest_bottom {
                blank(&mut self.frame.pixels);
            } else {
                sparkle(
                    &mut self.frame.pixels,
                    self.config.sparkle_color,
                    self.config.sparkle_probability,
                    rng,
                );
            }
            self.last_sparkle_ms = Some(now_ms);
        }

        let brightness_changed = self.flushed_brightness != Some(self.frame.brightness);
        if !sparkle_due && !brightness_changed {
            return None;
        }

        match self.flush() {
            Ok(()) => Some(Event::LedsFlushed {
                brightness_permille: permille(self.frame.brightness),
                sparkle: sparkle_due,
            }),
            Err(e) => Some(Event::StripFault(e)),
        }
    }

    fn flush(&mut self) -> Result<(), StripError> {
        self.strip.write(&self.frame.pixels, self.frame.brightness)?;
        self.flushed_brightness = Some(self.frame.brightness);
        Ok(())
    }
}
