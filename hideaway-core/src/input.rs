//! Switch sampling and edge detection
//!
//! All three switches are pulled up and read active-low: a raw low level
//! means pressed. Levels are sampled once per tick and compared with the
//! previous tick's sample to find presses.

use hideaway_hal::InputPin;

/// Pressed state of each switch for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchLevels {
    /// Main switch pressed
    pub main: bool,
    /// Secret switch A pressed
    pub secret_a: bool,
    /// Secret switch B pressed
    pub secret_b: bool,
}

impl SwitchLevels {
    /// Nothing pressed
    pub const RELEASED: Self = Self {
        main: false,
        secret_a: false,
        secret_b: false,
    };

    /// Translate raw pin levels (high = released)
    pub const fn from_raw(main_high: bool, secret_a_high: bool, secret_b_high: bool) -> Self {
        Self {
            main: !main_high,
            secret_a: !secret_a_high,
            secret_b: !secret_b_high,
        }
    }

    /// Presses that happened between `previous` and this sample
    pub const fn edges_since(&self, previous: &SwitchLevels) -> SwitchEdges {
        SwitchEdges {
            main: self.main && !previous.main,
            secret_a: self.secret_a && !previous.secret_a,
            secret_b: self.secret_b && !previous.secret_b,
        }
    }
}

/// Falling edges (released to pressed) seen in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchEdges {
    pub main: bool,
    pub secret_a: bool,
    pub secret_b: bool,
}

impl SwitchEdges {
    /// Check if any switch was pressed this tick
    #[cfg(test)]
    pub fn any(&self) -> bool {
        self.main || self.secret_a || self.secret_b
    }
}

/// Samples the three switches and remembers the previous tick
pub struct InputReader<I> {
    main: I,
    secret_a: I,
    secret_b: I,
    previous: SwitchLevels,
}

impl<I: InputPin> InputReader<I> {
    /// Create a reader, seeding the previous sample from the pins
    ///
    /// A switch held down at boot does not count as a press.
    pub fn new(main: I, secret_a: I, secret_b: I) -> Self {
        let mut reader = Self {
            main,
            secret_a,
            secret_b,
            previous: SwitchLevels::RELEASED,
        };
        reader.previous = reader.sample();
        reader
    }

    /// Read all three switches
    pub fn sample(&mut self) -> SwitchLevels {
        SwitchLevels::from_raw(
            self.main.is_high(),
            self.secret_a.is_high(),
            self.secret_b.is_high(),
        )
    }

    /// Edges between the stored previous sample and `current`
    pub fn edges(&self, current: &SwitchLevels) -> SwitchEdges {
        current.edges_since(&self.previous)
    }

    /// Store `current` as the previous sample for the next tick
    pub fn commit(&mut self, current: SwitchLevels) {
        self.previous = current;
    }

    /// Sample stored by the last commit
    #[cfg(test)]
    pub fn previous(&self) -> SwitchLevels {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Input pin backed by a shared cell (true = high = released)
    struct MockInput<'a>(&'a Cell<bool>);

    impl InputPin for MockInput<'_> {
        fn is_high(&mut self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_low_translation() {
        let levels = SwitchLevels::from_raw(false, true, false);
        assert!(levels.main);
        assert!(!levels.secret_a);
        assert!(levels.secret_b);
        assert_eq!(SwitchLevels::from_raw(true, true, true), SwitchLevels::RELEASED);
    }

    #[test]
    fn test_edges_only_on_press() {
        let released = SwitchLevels::RELEASED;
        let pressed = SwitchLevels {
            main: true,
            ..SwitchLevels::RELEASED
        };

        assert!(pressed.edges_since(&released).main);
        // Held: no edge
        assert!(!pressed.edges_since(&pressed).main);
        // Release: no edge
        assert!(!released.edges_since(&pressed).any());
    }

    #[test]
    fn test_reader_detects_press_and_hold() {
        let main = Cell::new(true);
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut reader = InputReader::new(MockInput(&main), MockInput(&a), MockInput(&b));

        let levels = reader.sample();
        assert!(!reader.edges(&levels).any());
        reader.commit(levels);

        a.set(false);
        let levels = reader.sample();
        let edges = reader.edges(&levels);
        assert!(edges.secret_a);
        assert!(!edges.main && !edges.secret_b);
        reader.commit(levels);

        // Still held next tick
        let levels = reader.sample();
        assert!(!reader.edges(&levels).secret_a);
    }

    #[test]
    fn test_held_at_boot_is_not_a_press() {
        let main = Cell::new(false);
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut reader = InputReader::new(MockInput(&main), MockInput(&a), MockInput(&b));

        assert!(reader.previous().main);
        let levels = reader.sample();
        assert!(!reader.edges(&levels).main);
    }

    #[test]
    fn test_edge_requires_commit() {
        let main = Cell::new(true);
        let a = Cell::new(true);
        let b = Cell::new(true);
        let mut reader = InputReader::new(MockInput(&main), MockInput(&a), MockInput(&b));

        main.set(false);
        let levels = reader.sample();
        // Without a commit the same press is reported again
        assert!(reader.edges(&levels).main);
        let again = reader.sample();
        assert!(reader.edges(&again).main);
        reader.commit(levels);
        let held = reader.sample();
        assert!(!reader.edges(&held).main);
    }
}
