//! Brightness ramp following the panel

use crate::config::PropConfig;
use crate::state::{ActuatorState, Position};

/// Fraction of the travel time elapsed, clamped to `0.0..=1.0`
fn travel_fraction(elapsed_ms: u64, movement_ms: u64) -> f32 {
    if movement_ms == 0 {
        return 1.0;
    }
    (elapsed_ms as f32 / movement_ms as f32).clamp(0.0, 1.0)
}

/// Strip brightness for the given actuator state
///
/// Ramps linearly from min to max while rising and from max to min while
/// lowering. At rest it sits at max on top and min at the bottom. The
/// result is always within the configured bounds, even when the tick
/// arrives after the travel time has run out.
pub fn target_brightness(
    state: &ActuatorState,
    position: Position,
    now_ms: u64,
    config: &PropConfig,
) -> f32 {
    let min = config.min_brightness;
    let max = config.max_brightness;
    let span = max - min;

    let brightness = match *state {
        ActuatorState::MovingUp { started_ms } => {
            let t = travel_fraction(now_ms.saturating_sub(started_ms), config.movement_ms);
            min + span * t
        }
        ActuatorState::MovingDown { started_ms } => {
            let t = travel_fraction(now_ms.saturating_sub(started_ms), config.movement_ms);
            max - span * t
        }
        ActuatorState::Idle => match position {
            Position::Top => max,
            Position::Bottom => min,
        },
    };

    brightness.clamp(min, max)
}
