//! Inter-task communication channels
//!
//! The control task never awaits the strip. It publishes the latest
//! scaled frame here and the LED task transmits whatever is newest.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use rgb::RGB8;

use hideaway_core::config::PIXEL_COUNT;

/// Brightness-scaled pixels ready for the wire
pub type WireFrame = [RGB8; PIXEL_COUNT];

/// Latest LED frame (updated by the control task)
pub static LED_FRAME: Signal<CriticalSectionRawMutex, WireFrame> = Signal::new();
