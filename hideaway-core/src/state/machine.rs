//! Actuator state definition
//!
//! Movement start times live inside the moving variants, so a moving
//! state without a start time cannot be represented.

/// Direction of actuator travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Raising the panel
    Up,
    /// Lowering the panel
    Down,
}

impl Direction {
    /// The reverse direction
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Position reached by travelling in this direction
    pub const fn destination(self) -> Position {
        match self {
            Direction::Up => Position::Top,
            Direction::Down => Position::Bottom,
        }
    }
}

/// Last known resting position of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// Panel raised
    Top,
    /// Panel lowered (boot default)
    #[default]
    Bottom,
}

/// Actuator states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorState {
    /// Motors off, waiting for the main switch
    #[default]
    Idle,
    /// Up line asserted since `started_ms`
    MovingUp { started_ms: u64 },
    /// Down line asserted since `started_ms`
    MovingDown { started_ms: u64 },
}

impl ActuatorState {
    /// Moving state for a direction
    pub const fn moving(direction: Direction, started_ms: u64) -> Self {
        match direction {
            Direction::Up => ActuatorState::MovingUp { started_ms },
            Direction::Down => ActuatorState::MovingDown { started_ms },
        }
    }

    /// Check if the actuator is moving
    pub fn is_moving(&self) -> bool {
        !matches!(self, ActuatorState::Idle)
    }

    /// Direction of travel, if moving
    pub fn direction(&self) -> Option<Direction> {
        match self {
            ActuatorState::Idle => None,
            ActuatorState::MovingUp { .. } => Some(Direction::Up),
            ActuatorState::MovingDown { .. } => Some(Direction::Down),
        }
    }

    /// Movement start time, if moving
    pub fn started_ms(&self) -> Option<u64> {
        match *self {
            ActuatorState::Idle => None,
            ActuatorState::MovingUp { started_ms } | ActuatorState::MovingDown { started_ms } => {
                Some(started_ms)
            }
        }
    }

    /// Time spent in the current movement, if moving
    ///
    /// Saturates to zero if `now_ms` precedes the start time.
    pub fn elapsed_ms(&self, now_ms: u64) -> Option<u64> {
        self.started_ms()
            .map(|started| now_ms.saturating_sub(started))
    }

    /// Check if a movement has run for its full duration
    pub fn travel_complete(&self, now_ms: u64, movement_ms: u64) -> bool {
        self.elapsed_ms(now_ms)
            .is_some_and(|elapsed| elapsed >= movement_ms)
    }
}
