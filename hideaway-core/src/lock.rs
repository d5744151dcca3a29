//! Timed lock output
//!
//! The lock output is level driven: it is rewritten from the `open` flag
//! on every tick, so a missed write corrects itself on the next one.
//! The open window is hard capped regardless of other activity.

use hideaway_hal::OutputPin;

use crate::state::Event;

/// Logical lock state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockState {
    /// Lock output should be asserted
    pub open: bool,
    /// Time of the unlock that opened the lock
    pub opened_at_ms: u64,
}

/// Lock output controller
pub struct LockController<O> {
    output: O,
    state: LockState,
    open_ms: u64,
}

impl<O: OutputPin> LockController<O> {
    /// Take ownership of the lock output and drive it closed
    pub fn new(mut output: O, open_ms: u64) -> Self {
        output.set_low();
        Self {
            output,
            state: LockState::default(),
            open_ms,
        }
    }

    /// Current logical state
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Check if the lock is open
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Check the physical output level
    pub fn output_asserted(&self) -> bool {
        self.output.is_set_high()
    }

    /// Open the lock
    ///
    /// Unlocking while already open restarts the open window. The output
    /// follows on the next [`tick`](Self::tick).
    pub fn unlock(&mut self, now_ms: u64) -> Event {
        self.state = LockState {
            open: true,
            opened_at_ms: now_ms,
        };
        Event::Unlocked
    }

    /// Close the lock once the open window has passed, then mirror the
    /// state onto the output
    pub fn tick(&mut self, now_ms: u64) -> Option<Event> {
        let mut event = None;
        if self.state.open && now_ms.saturating_sub(self.state.opened_at_ms) >= self.open_ms {
            self.state.open = false;
            event = Some(Event::Relocked);
        }

        self.output.set_state(self.state.open);
        event
    }
}
