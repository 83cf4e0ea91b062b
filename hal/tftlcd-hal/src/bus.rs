//! Parallel bus capability
//!
//! [`ParallelBus`] is the single seam between the protocol layer and the
//! board. Control lines are addressed by [`Line`] so the protocol code can
//! stay free of pin types; [`GpioBus`] builds one out of discrete pins.

use crate::gpio::OutputPin;
use crate::port::{BusDirection, DataPort};

/// Control lines of an 8080-style parallel panel
///
/// All lines are active-low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Chip select (CS)
    ChipSelect,
    /// Command/data select (CD, also called RS or DC); low = command
    CommandData,
    /// Write strobe (WR)
    Write,
    /// Read strobe (RD)
    Read,
    /// Hardware reset (RST)
    Reset,
}

/// Everything the protocol layer needs from the board
pub trait ParallelBus {
    /// Configure control lines as outputs and the data port pin modes
    fn configure(&mut self);

    /// Drive a control line high or low
    fn set_line(&mut self, line: Line, high: bool);

    /// Whether a hardware reset line is wired
    fn has_reset(&self) -> bool;

    /// Drive the data port
    fn write_data(&mut self, value: u8);

    /// Sample the data port
    fn read_data(&mut self) -> u8;

    /// Flip the data port between output and input
    fn set_data_direction(&mut self, direction: BusDirection);
}

/// Control pin assignment, populated once at startup
pub struct ControlPins<CS, CD, WR, RD, RST> {
    /// Chip select
    pub cs: CS,
    /// Command/data select
    pub cd: CD,
    /// Write strobe
    pub wr: WR,
    /// Read strobe
    pub rd: RD,
    /// Hardware reset, if wired
    pub reset: Option<RST>,
}

/// [`ParallelBus`] built from discrete output pins and a [`DataPort`]
pub struct GpioBus<CS, CD, WR, RD, RST, P> {
    pins: ControlPins<CS, CD, WR, RD, RST>,
    port: P,
}

impl<CS, CD, WR, RD, RST, P> GpioBus<CS, CD, WR, RD, RST, P>
where
    CS: OutputPin,
    CD: OutputPin,
    WR: OutputPin,
    RD: OutputPin,
    RST: OutputPin,
    P: DataPort,
{
    /// Create a new bus from its pins and data port
    pub fn new(pins: ControlPins<CS, CD, WR, RD, RST>, port: P) -> Self {
        Self { pins, port }
    }

    /// Give the pins and port back
    pub fn release(self) -> (ControlPins<CS, CD, WR, RD, RST>, P) {
        (self.pins, self.port)
    }
}

impl<CS, CD, WR, RD, RST, P> ParallelBus for GpioBus<CS, CD, WR, RD, RST, P>
where
    CS: OutputPin,
    CD: OutputPin,
    WR: OutputPin,
    RD: OutputPin,
    RST: OutputPin,
    P: DataPort,
{
    fn configure(&mut self) {
        // Pin modes for the discrete lines are fixed by their types; only
        // the port needs its mode registers programmed.
        self.port.configure();
    }

    #[inline(always)]
    fn set_line(&mut self, line: Line, high: bool) {
        match line {
            Line::ChipSelect => self.pins.cs.set_state(high),
            Line::CommandData => self.pins.cd.set_state(high),
            Line::Write => self.pins.wr.set_state(high),
            Line::Read => self.pins.rd.set_state(high),
            Line::Reset => {
                if let Some(rst) = self.pins.reset.as_mut() {
                    rst.set_state(high);
                }
            }
        }
    }

    fn has_reset(&self) -> bool {
        self.pins.reset.is_some()
    }

    #[inline(always)]
    fn write_data(&mut self, value: u8) {
        self.port.write(value);
    }

    #[inline(always)]
    fn read_data(&mut self) -> u8 {
        self.port.read()
    }

    fn set_data_direction(&mut self, direction: BusDirection) {
        self.port.set_direction(direction);
    }
}
