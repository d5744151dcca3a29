//! Secret sequence detector
//!
//! Each tick: record new presses, expire presses older than the
//! sequence timeout plus a grace period, then look for the target order.
//! A match empties the buffer so overlapping windows cannot fire again
//! on later ticks.

use super::buffer::{PressEvent, SequenceBuffer};
use super::SecretSwitch;
use crate::config::{PropConfig, SEQUENCE_LEN};
use crate::input::SwitchEdges;

/// A completed secret sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceMatch {
    /// First press of the matching window
    pub first: PressEvent,
    /// Last press of the matching window
    pub last: PressEvent,
}

impl SequenceMatch {
    /// Time between the first and last press
    pub fn span_ms(&self) -> u64 {
        self.last
            .timestamp_ms
            .saturating_sub(self.first.timestamp_ms)
    }
}

/// Secret sequence detector state
pub struct SequenceDetector {
    buffer: SequenceBuffer,
    pattern: [SecretSwitch; SEQUENCE_LEN],
    timeout_ms: u64,
    retention_ms: u64,
}

impl SequenceDetector {
    /// Create a detector for the configured pattern and timings
    pub fn new(config: &PropConfig) -> Self {
        Self {
            buffer: SequenceBuffer::new(),
            pattern: config.target_sequence,
            timeout_ms: config.sequence_timeout_ms,
            retention_ms: config.press_retention_ms(),
        }
    }

    /// Buffered presses
    pub fn buffer(&self) -> &SequenceBuffer {
        &self.buffer
    }

    /// Record a single press
    pub fn record(&mut self, switch: SecretSwitch, now_ms: u64) {
        self.buffer.push(PressEvent {
            timestamp_ms: now_ms,
            switch,
        });
    }

    /// Run one tick of detection
    ///
    /// Returns the match if this tick completed the sequence.
    pub fn update(&mut self, now_ms: u64, edges: &SwitchEdges) -> Option<SequenceMatch> {
        if edges.secret_a {
            self.record(SecretSwitch::A, now_ms);
        }
        if edges.secret_b {
            self.record(SecretSwitch::B, now_ms);
        }

        // Nothing can be old enough to expire before the retention period
        if let Some(cutoff) = now_ms.checked_sub(self.retention_ms) {
            self.buffer.prune(cutoff);
        }

        let (first, last) = self.buffer.find_window(&self.pattern, self.timeout_ms)?;
        self.buffer.clear();
        Some(SequenceMatch { first, last })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_a() -> SwitchEdges {
        SwitchEdges {
            secret_a: true,
            ..SwitchEdges::default()
        }
    }

    fn press_b() -> SwitchEdges {
        SwitchEdges {
            secret_b: true,
            ..SwitchEdges::default()
        }
    }

    fn idle() -> SwitchEdges {
        SwitchEdges::default()
    }

    #[test]
    fn test_match_clears_buffer() {
        let mut det = SequenceDetector::new(&PropConfig::DEFAULT);
        assert_eq!(det.update(0, &press_a()), None);
        assert_eq!(det.update(1_000, &press_b()), None);
        assert_eq!(det.update(2_000, &press_b()), None);

        let m = det.update(3_000, &press_a()).unwrap();
        assert_eq!(m.first.timestamp_ms, 0);
        assert_eq!(m.last.timestamp_ms, 3_000);
        assert_eq!(m.span_ms(), 3_000);
        assert!(det.buffer().is_empty());

        // No re-trigger on the following tick
        assert_eq!(det.update(3_010, &idle()), None);
    }

    #[test]
    fn test_slow_sequence_does_not_match() {
        let mut det = SequenceDetector::new(&PropConfig::DEFAULT);
        det.update(0, &press_a());
        det.update(6_000, &press_b());
        det.update(12_000, &press_b());
        assert_eq!(det.update(16_000, &press_a()), None);
        assert_eq!(det.buffer().len(), 4);
    }

    #[test]
    fn test_presses_expire_after_grace() {
        let mut det = SequenceDetector::new(&PropConfig::DEFAULT);
        det.update(1_000, &press_a());
        det.update(20_999, &idle());
        assert_eq!(det.buffer().len(), 1);

        // timestamp <= now - 20s is dropped
        det.update(21_000, &idle());
        assert!(det.buffer().is_empty());
    }

    #[test]
    fn test_wrong_order_never_matches() {
        let mut det = SequenceDetector::new(&PropConfig::DEFAULT);
        det.update(0, &press_b());
        det.update(100, &press_a());
        det.update(200, &press_a());
        assert_eq!(det.update(300, &press_b()), None);
    }

    #[test]
    fn test_simultaneous_presses_record_a_first() {
        let mut det = SequenceDetector::new(&PropConfig::DEFAULT);
        let both = SwitchEdges {
            secret_a: true,
            secret_b: true,
            main: false,
        };
        det.update(0, &both);
        let switches: heapless::Vec<SecretSwitch, 4> =
            det.buffer().iter().map(|p| p.switch).collect();
        assert_eq!(switches.as_slice(), &[SecretSwitch::A, SecretSwitch::B]);

        // A,B then B,A completes the pattern from the same-tick pair
        det.update(100, &press_b());
        assert!(det.update(200, &press_a()).is_some());
    }

    #[test]
    fn test_main_switch_is_ignored() {
        let mut det = SequenceDetector::new(&PropConfig::DEFAULT);
        let main = SwitchEdges {
            main: true,
            ..SwitchEdges::default()
        };
        det.update(0, &main);
        assert!(det.buffer().is_empty());
    }
}
