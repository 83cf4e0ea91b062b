//! 8-bit data port abstraction
//!
//! The data bus is shared between host writes and panel reads, so the
//! whole port flips between output and input mode at once.

/// Direction of the shared data bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusDirection {
    /// Host drives the bus (pins are outputs)
    #[default]
    Write,
    /// Panel drives the bus (pins are inputs)
    Read,
}

/// Register-mapped GPIO port carrying the 8 data lines
///
/// Implementations usually write the port's output/bit-set register in
/// [`DataPort::write`] and shift the input register down in
/// [`DataPort::read`] when the bus does not start at pin 0.
pub trait DataPort {
    /// Program the port mode/configuration registers for bus use
    ///
    /// Called once from the startup reset sequence.
    fn configure(&mut self);

    /// Drive the 8 data lines to `value`
    fn write(&mut self, value: u8);

    /// Sample the 8 data lines
    fn read(&mut self) -> u8;

    /// Switch all 8 data lines to outputs (`Write`) or inputs (`Read`)
    fn set_direction(&mut self, direction: BusDirection);
}
