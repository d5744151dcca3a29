//! Random sparkle overlay

use rand_core::RngCore;
use rgb::RGB8;

use crate::config::PIXEL_OFF;

/// Scale for turning 24 random bits into a uniform `0.0..1.0` sample
const UNIT_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

/// Draw a uniform sample in `0.0..1.0`
fn unit_sample<R: RngCore>(rng: &mut R) -> f32 {
    (rng.next_u32() >> 8) as f32 * UNIT_SCALE
}

/// Light each pixel with `on` independently with the given probability
pub fn sparkle<R: RngCore>(pixels: &mut [RGB8], on: RGB8, probability: f32, rng: &mut R) {
    for pixel in pixels.iter_mut() {
        *pixel = if unit_sample(rng) < probability {
            on
        } else {
            PIXEL_OFF
        };
    }
}

/// Turn every pixel off
pub fn blank(pixels: &mut [RGB8]) {
    pixels.fill(PIXEL_OFF);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SPARKLE_ON;

    /// RNG returning a fixed word
    struct ConstRng(u32);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            self.0 as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_low_samples_light_pixels() {
        let mut pixels = [PIXEL_OFF; 12];
        sparkle(&mut pixels, SPARKLE_ON, 0.8, &mut ConstRng(0));
        assert!(pixels.iter().all(|p| *p == SPARKLE_ON));
    }

    #[test]
    fn test_high_samples_leave_pixels_off() {
        let mut pixels = [SPARKLE_ON; 12];
        sparkle(&mut pixels, SPARKLE_ON, 0.8, &mut ConstRng(u32::MAX));
        assert!(pixels.iter().all(|p| *p == PIXEL_OFF));
    }

    #[test]
    fn test_probability_edges() {
        let mut pixels = [PIXEL_OFF; 12];
        sparkle(&mut pixels, SPARKLE_ON, 1.0, &mut ConstRng(u32::MAX));
        assert!(pixels.iter().all(|p| *p == SPARKLE_ON));

        sparkle(&mut pixels, SPARKLE_ON, 0.0, &mut ConstRng(0));
        assert!(pixels.iter().all(|p| *p == PIXEL_OFF));
    }

    #[test]
    fn test_threshold_is_strict() {
        // 0.5 exactly: sample 0x8000_0000 >> 8 = 2^23 -> 0.5, not below 0.5
        let mut pixels = [PIXEL_OFF; 1];
        sparkle(&mut pixels, SPARKLE_ON, 0.5, &mut ConstRng(0x8000_0000));
        assert_eq!(pixels[0], PIXEL_OFF);
        sparkle(&mut pixels, SPARKLE_ON, 0.5, &mut ConstRng(0x7FFF_FFFF));
        assert_eq!(pixels[0], SPARKLE_ON);
    }

    #[test]
    fn test_blank() {
        let mut pixels = [SPARKLE_ON; 12];
        blank(&mut pixels);
        assert!(pixels.iter().all(|p| *p == PIXEL_OFF));
    }
}
