//! Bounded, expiring press buffer

use heapless::Deque;

use super::SecretSwitch;
use crate::config::MAX_BUFFERED_PRESSES;

/// A recorded press on a secret switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    /// Tick time of the press
    pub timestamp_ms: u64,
    /// Which switch was pressed
    pub switch: SecretSwitch,
}

/// Presses in arrival order, oldest first
///
/// Fixed capacity. When full, pushing evicts the oldest press.
#[derive(Debug, Default)]
pub struct SequenceBuffer {
    presses: Deque<PressEvent, MAX_BUFFERED_PRESSES>,
}

impl SequenceBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            presses: Deque::new(),
        }
    }

    /// Number of buffered presses
    pub fn len(&self) -> usize {
        self.presses.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// Iterate presses oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PressEvent> {
        self.presses.iter()
    }

    /// Append a press, evicting the oldest if full
    pub fn push(&mut self, press: PressEvent) {
        if self.presses.is_full() {
            self.presses.pop_front();
        }
        // Cannot fail: a slot was freed above
        let _ = self.presses.push_back(press);
    }

    /// Drop every press with `timestamp <= cutoff_ms`
    ///
    /// Presses are appended in time order, so expired presses are
    /// always at the front.
    pub fn prune(&mut self, cutoff_ms: u64) {
        while self
            .presses
            .front()
            .is_some_and(|press| press.timestamp_ms <= cutoff_ms)
        {
            self.presses.pop_front();
        }
    }

    /// Remove all presses
    pub fn clear(&mut self) {
        self.presses.clear();
    }

    /// Find the earliest window matching `pattern` within `max_span_ms`
    ///
    /// Windows are contiguous runs of `pattern.len()` presses. Returns the
    /// first and last press of the matching window.
    pub fn find_window(
        &self,
        pattern: &[SecretSwitch],
        max_span_ms: u64,
    ) -> Option<(PressEvent, PressEvent)> {
        let len = pattern.len();
        if len == 0 || self.presses.len() < len {
            return None;
        }

        for start in 0..=(self.presses.len() - len) {
            let window = || self.presses.iter().skip(start).take(len);
            let ids_match = window()
                .zip(pattern)
                .all(|(press, expected)| press.switch == *expected);
            if !ids_match {
                continue;
            }

            let mut presses = window();
            let first = presses.next()?;
            let last = presses.last().unwrap_or(first);
            if last.timestamp_ms.saturating_sub(first.timestamp_ms) <= max_span_ms {
                return Some((*first, *last));
            }
        }
        None
    }
}
