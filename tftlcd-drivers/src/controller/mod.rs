//! Controller variants
//!
//! Each supported family contributes an opcode table, an init sequence
//! and its way of addressing GRAM. [`PanelController`] is the uniform
//! capability surface the blit engine calls through; it is implemented
//! for the closed [`ControllerKind`] enum, so dispatch is a `match`
//! rather than a vtable on the fill path.

pub mod dcs;
pub mod hx8347g;
pub mod hx8357d;
pub mod ili932x;
pub mod ili9341;
pub mod st7789;

use embedded_hal::delay::DelayNs;
use tftlcd_core::{AddressWindow, ControllerKind, Geometry};
use tftlcd_hal::ParallelBus;

use crate::bus::BusContext;

/// One step of a controller init sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    /// Command followed by its parameter bytes
    Command(u16, &'static [u8]),
    /// 16-bit indexed register write
    Register16(u16, u16),
    /// Pause in milliseconds
    Delay(u32),
}

/// Per-chip operations used by the driver
pub trait PanelController {
    /// Native dimensions
    fn geometry(&self) -> Geometry;

    /// Power-up register sequence
    fn init_sequence(&self) -> &'static [InitStep];

    /// Program the GRAM window and reset the write pointer to its origin
    fn set_address_window<B, D>(&self, bus: &mut BusContext<B, D>, window: AddressWindow)
    where
        B: ParallelBus,
        D: DelayNs;

    /// Send the GRAM write command; CS stays asserted for pixel data
    fn issue_preamble<B, D>(&self, bus: &mut BusContext<B, D>)
    where
        B: ParallelBus,
        D: DelayNs;

    fn set_display_on<B, D>(&self, bus: &mut BusContext<B, D>, on: bool)
    where
        B: ParallelBus,
        D: DelayNs;

    /// Invert colors relative to the panel's normal image
    fn set_inverted<B, D>(&self, bus: &mut BusContext<B, D>, inverted: bool)
    where
        B: ParallelBus,
        D: DelayNs;
}

impl PanelController for ControllerKind {
    fn geometry(&self) -> Geometry {
        ControllerKind::geometry(*self)
    }

    fn init_sequence(&self) -> &'static [InitStep] {
        match self {
            Self::Ili932x => ili932x::INIT,
            Self::Ili9341 => ili9341::INIT,
            Self::Hx8347g => hx8347g::INIT,
            Self::Hx8357d => hx8357d::INIT,
            Self::St7789 => st7789::INIT,
        }
    }

    #[inline]
    fn set_address_window<B, D>(&self, bus: &mut BusContext<B, D>, window: AddressWindow)
    where
        B: ParallelBus,
        D: DelayNs,
    {
        match self {
            Self::Ili932x => ili932x::set_address_window(bus, window),
            Self::Hx8347g => hx8347g::set_address_window(bus, window),
            Self::Ili9341 | Self::Hx8357d | Self::St7789 => dcs::set_address_window(bus, window),
        }
    }

    #[inline]
    fn issue_preamble<B, D>(&self, bus: &mut BusContext<B, D>)
    where
        B: ParallelBus,
        D: DelayNs,
    {
        let cmd = match self {
            Self::Ili932x => ili932x::reg::GRAM_DATA,
            Self::Hx8347g => hx8347g::reg::GRAM_DATA,
            Self::Ili9341 | Self::Hx8357d | Self::St7789 => dcs::cmd::MEMORY_WRITE,
        };
        bus.write_command(cmd);
    }

    fn set_display_on<B, D>(&self, bus: &mut BusContext<B, D>, on: bool)
    where
        B: ParallelBus,
        D: DelayNs,
    {
        match self {
            Self::Ili932x => ili932x::set_display_on(bus, on),
            Self::Hx8347g => hx8347g::set_display_on(bus, on),
            Self::Ili9341 | Self::Hx8357d | Self::St7789 => dcs::set_display_on(bus, on),
        }
    }

    fn set_inverted<B, D>(&self, bus: &mut BusContext<B, D>, inverted: bool)
    where
        B: ParallelBus,
        D: DelayNs,
    {
        match self {
            Self::Ili932x => ili932x::set_inverted(bus, inverted),
            Self::Hx8347g => hx8347g::set_inverted(bus, inverted),
            Self::Ili9341 | Self::Hx8357d => dcs::set_inverted(bus, inverted),
            // IPS glass shows correct colors with inversion on
            Self::St7789 => dcs::set_inverted(bus, !inverted),
        }
    }
}

/// Play an init sequence onto the bus
pub fn run_init<B, D>(bus: &mut BusContext<B, D>, steps: &[InitStep])
where
    B: ParallelBus,
    D: DelayNs,
{
    for step in steps {
        match *step {
            InitStep::Command(cmd, params) => bus.write_register_bytes(cmd, params),
            InitStep::Register16(addr, value) => bus.write_register16(addr, value),
            InitStep::Delay(ms) => bus.delay_ms(ms),
        }
    }
}
