//! Events raised by the control loop

use heapless::Vec;
use hideaway_hal::StripError;

use super::machine::{Direction, Position};

/// Maximum events a single tick can raise
///
/// `Prop::tick` pushes at most six: sequence match, unlock, relock, the
/// main switch event, movement completion and the LED event. Raise this
/// bound before adding another, or the overflow is dropped.
pub const MAX_TICK_EVENTS: usize = 8;

/// Events raised while servicing a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Actuator events
    /// Motor line asserted for a new movement
    MovementStarted(Direction),
    /// Movement ran for its full duration
    MovementCompleted {
        direction: Direction,
        position: Position,
    },
    /// Main switch pressed while moving
    EmergencyStop {
        interrupted: Direction,
        position: Position,
    },

    // Secret lock events
    /// Secret switches entered the target order in time
    SequenceMatched { span_ms: u64 },
    /// Lock output asserted
    Unlocked,
    /// Lock output released after the open window
    Relocked,

    // LED events
    /// Frame pushed to the strip
    LedsFlushed {
        /// Brightness in thousandths
        brightness_permille: u16,
        /// Sparkle pattern was regenerated for this frame
        sparkle: bool,
    },
    /// Strip rejected a frame
    StripFault(StripError),
}

impl Event {
    /// Check if this event comes from the actuator
    pub fn is_actuator_event(&self) -> bool {
        matches!(
            self,
            Event::MovementStarted(_)
                | Event::MovementCompleted { .. }
                | Event::EmergencyStop { .. }
        )
    }

    /// Check if this event comes from the lock path
    pub fn is_lock_event(&self) -> bool {
        matches!(
            self,
            Event::SequenceMatched { .. } | Event::Unlocked | Event::Relocked
        )
    }

    /// Check if this event indicates a fault
    pub fn is_fault(&self) -> bool {
        matches!(self, Event::StripFault(_))
    }
}

/// Ordered list of the events raised in one tick
pub type TickReport = Vec<Event, MAX_TICK_EVENTS>;
