//! Configuration type definitions
//!
//! Timings are milliseconds of monotonic time. Brightness values are
//! scalars in `0.0..=1.0` applied to the whole strip.

use rgb::RGB8;

use crate::sequence::SecretSwitch;

/// Number of pixels on the LED strip
pub const PIXEL_COUNT: usize = 12;

/// Number of presses in the secret sequence
pub const SEQUENCE_LEN: usize = 4;

/// Maximum presses held in the sequence buffer
pub const MAX_BUFFERED_PRESSES: usize = 16;

/// Pixel colour for a lit sparkle
pub const SPARKLE_ON: RGB8 = RGB8 {
    r: 200,
    g: 200,
    b: 200,
};

/// Pixel colour for an unlit sparkle
pub const PIXEL_OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period must be non-zero
    ZeroTickPeriod,
    /// Movement duration must be non-zero
    ZeroMovementDuration,
    /// Brightness bounds must satisfy 0 <= min <= max <= 1
    BrightnessRange,
    /// Sparkle probability must lie in 0..=1
    SparkleProbability,
    /// LED updates must not be faster than the control tick
    UpdateFasterThanTick,
}

/// Prop timing and animation configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropConfig {
    /// Control loop period
    pub tick_ms: u64,
    /// Full travel time of the actuator in either direction
    pub movement_ms: u64,
    /// Minimum spacing between LED brightness updates
    pub brightness_update_ms: u64,
    /// Spacing between sparkle pattern refreshes
    pub sparkle_update_ms: u64,
    /// Probability that a pixel is lit in a sparkle refresh
    pub sparkle_probability: f32,
    /// Strip brightness at the bottom
    pub min_brightness: f32,
    /// Strip brightness at the top
    pub max_brightness: f32,
    /// Colour of a lit sparkle pixel
    pub sparkle_color: RGB8,
    /// How long the lock output stays asserted after an unlock
    pub lock_open_ms: u64,
    /// Maximum span between the first and last press of the sequence
    pub sequence_timeout_ms: u64,
    /// Extra retention for presses beyond the sequence timeout
    pub sequence_grace_ms: u64,
    /// Secret switch order that unlocks the door
    pub target_sequence: [SecretSwitch; SEQUENCE_LEN],
}

impl PropConfig {
    /// Factory configuration
    pub const DEFAULT: Self = Self {
        tick_ms: 10,
        movement_ms: 13_000,
        brightness_update_ms: 100,
        sparkle_update_ms: 2_000,
        sparkle_probability: 0.8,
        min_brightness: 0.1,
        max_brightness: 0.9,
        sparkle_color: SPARKLE_ON,
        lock_open_ms: 500,
        sequence_timeout_ms: 15_000,
        sequence_grace_ms: 5_000,
        target_sequence: [
            SecretSwitch::A,
            SecretSwitch::B,
            SecretSwitch::B,
            SecretSwitch::A,
        ],
    };

    /// Check the configuration for values the control loop cannot honour
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.movement_ms == 0 {
            return Err(ConfigError::ZeroMovementDuration);
        }
        if !(self.min_brightness >= 0.0
            && self.min_brightness <= self.max_brightness
            && self.max_brightness <= 1.0)
        {
            return Err(ConfigError::BrightnessRange);
        }
        if !(self.sparkle_probability >= 0.0 && self.sparkle_probability <= 1.0) {
            return Err(ConfigError::SparkleProbability);
        }
        if self.brightness_update_ms < self.tick_ms {
            return Err(ConfigError::UpdateFasterThanTick);
        }
        Ok(())
    }

    /// Age past which a buffered press can no longer be part of a match
    pub const fn press_retention_ms(&self) -> u64 {
        self.sequence_timeout_ms + self.sequence_grace_ms
    }
}

impl Default for PropConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
