//! MIPI DCS command set shared by ILI9341, HX8357D and ST7789

use embedded_hal::delay::DelayNs;
use tftlcd_core::AddressWindow;
use tftlcd_hal::ParallelBus;

use crate::bus::BusContext;

/// DCS opcodes
pub mod cmd {
    pub const SOFT_RESET: u16 = 0x01;
    pub const SLEEP_IN: u16 = 0x10;
    pub const SLEEP_OUT: u16 = 0x11;
    pub const NORMAL_MODE: u16 = 0x13;
    pub const INVERT_OFF: u16 = 0x20;
    pub const INVERT_ON: u16 = 0x21;
    pub const DISPLAY_OFF: u16 = 0x28;
    pub const DISPLAY_ON: u16 = 0x29;
    pub const COLUMN_ADDRESS_SET: u16 = 0x2A;
    pub const PAGE_ADDRESS_SET: u16 = 0x2B;
    pub const MEMORY_WRITE: u16 = 0x2C;
    pub const TEARING_EFFECT_ON: u16 = 0x35;
    pub const MEMORY_ACCESS_CONTROL: u16 = 0x36;
    pub const PIXEL_FORMAT: u16 = 0x3A;
    pub const TEAR_SCANLINE: u16 = 0x44;
}

/// MEMORY_ACCESS_CONTROL bits
pub mod madctl {
    pub const MY: u8 = 0x80;
    pub const MX: u8 = 0x40;
    pub const MV: u8 = 0x20;
    pub const ML: u8 = 0x10;
    pub const BGR: u8 = 0x08;
}

/// PIXEL_FORMAT value for 16 bits per pixel
pub const PIXEL_FORMAT_16BPP: u8 = 0x55;

pub fn set_address_window<B, D>(bus: &mut BusContext<B, D>, w: AddressWindow)
where
    B: ParallelBus,
    D: DelayNs,
{
    bus.write_register32(
        cmd::COLUMN_ADDRESS_SET,
        ((w.x1 as u32) << 16) | w.x2 as u32,
    );
    bus.write_register32(cmd::PAGE_ADDRESS_SET, ((w.y1 as u32) << 16) | w.y2 as u32);
}

pub fn set_display_on<B, D>(bus: &mut BusContext<B, D>, on: bool)
where
    B: ParallelBus,
    D: DelayNs,
{
    let cmd = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
    bus.write_register_bytes(cmd, &[]);
}

pub fn set_inverted<B, D>(bus: &mut BusContext<B, D>, inverted: bool)
where
    B: ParallelBus,
    D: DelayNs,
{
    let cmd = if inverted {
        cmd::INVERT_ON
    } else {
        cmd::INVERT_OFF
    };
    bus.write_register_bytes(cmd, &[]);
}
