//! `embedded-hal` 1.0 adapters
//!
//! Wraps any infallible `embedded-hal` digital pin (e.g. embassy-rp
//! `Input`/`Output`) so it satisfies the traits in [`crate::gpio`].

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Unwrap a result whose error can never occur
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Output pin adapter
///
/// Tracks the last commanded level so `is_set_high` does not need
/// mutable access to the underlying pin.
pub struct HalOutput<P> {
    pin: P,
    high: bool,
}

impl<P> HalOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    /// Wrap a pin and drive it low
    pub fn new(pin: P) -> Self {
        let mut out = Self { pin, high: true };
        out.set_low();
        out
    }

    /// Release the wrapped pin
    #[cfg(test)]
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for HalOutput<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin adapter
pub struct HalInput<P> {
    pin: P,
}

impl<P> HalInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    /// Wrap a pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    #[cfg(test)]
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> InputPin for HalInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        infallible(self.pin.is_high())
    }
}
