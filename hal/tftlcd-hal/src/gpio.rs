//! GPIO pin abstractions
//!
//! The control lines of a parallel panel are plain push-pull outputs.
//! Pin writes on the supported MCUs cannot fail, so these traits are
//! infallible and cheap enough to call from the strobe loop.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    #[inline]
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Placeholder for a line that is not wired
///
/// Boards that tie the panel reset to the MCU reset use this as the
/// reset pin type.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl OutputPin for NoPin {
    #[inline]
    fn set_high(&mut self) {}

    #[inline]
    fn set_low(&mut self) {}

    fn is_set_high(&self) -> bool {
        false
    }
}
