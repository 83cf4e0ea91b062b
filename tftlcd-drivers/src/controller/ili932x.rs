//! ILI9325 / ILI9328
//!
//! Indexed 16-bit registers. The window is set with four boundary
//! registers, and unlike the DCS parts the write pointer must be placed
//! explicitly through the GRAM address registers.

use embedded_hal::delay::DelayNs;
use tftlcd_core::AddressWindow;
use tftlcd_hal::ParallelBus;

use super::InitStep;
use crate::bus::BusContext;

/// ILI932x register addresses
pub mod reg {
    pub const START_OSC: u16 = 0x00;
    pub const DRIVER_OUTPUT_CONTROL: u16 = 0x01;
    pub const DRIVING_WAVE_CONTROL: u16 = 0x02;
    pub const ENTRY_MODE: u16 = 0x03;
    pub const RESIZE_CONTROL: u16 = 0x04;
    pub const DISPLAY_CONTROL1: u16 = 0x07;
    pub const DISPLAY_CONTROL2: u16 = 0x08;
    pub const DISPLAY_CONTROL3: u16 = 0x09;
    pub const DISPLAY_CONTROL4: u16 = 0x0A;
    pub const RGB_INTERFACE_CONTROL1: u16 = 0x0C;
    pub const FRAME_MARKER_POSITION: u16 = 0x0D;
    pub const RGB_INTERFACE_CONTROL2: u16 = 0x0F;
    pub const POWER_CONTROL1: u16 = 0x10;
    pub const POWER_CONTROL2: u16 = 0x11;
    pub const POWER_CONTROL3: u16 = 0x12;
    pub const POWER_CONTROL4: u16 = 0x13;
    /// GRAM write pointer, horizontal
    pub const GRAM_HORIZONTAL: u16 = 0x20;
    /// GRAM write pointer, vertical
    pub const GRAM_VERTICAL: u16 = 0x21;
    /// GRAM data port
    pub const GRAM_DATA: u16 = 0x22;
    pub const POWER_CONTROL7: u16 = 0x29;
    pub const FRAME_RATE: u16 = 0x2B;
    pub const GAMMA_CONTROL1: u16 = 0x30;
    pub const GAMMA_CONTROL2: u16 = 0x31;
    pub const GAMMA_CONTROL3: u16 = 0x32;
    pub const GAMMA_CONTROL4: u16 = 0x35;
    pub const GAMMA_CONTROL5: u16 = 0x36;
    pub const GAMMA_CONTROL6: u16 = 0x37;
    pub const GAMMA_CONTROL7: u16 = 0x38;
    pub const GAMMA_CONTROL8: u16 = 0x39;
    pub const GAMMA_CONTROL9: u16 = 0x3C;
    pub const GAMMA_CONTROL10: u16 = 0x3D;
    pub const HORIZONTAL_START: u16 = 0x50;
    pub const HORIZONTAL_END: u16 = 0x51;
    pub const VERTICAL_START: u16 = 0x52;
    pub const VERTICAL_END: u16 = 0x53;
    pub const GATE_SCAN_CONTROL1: u16 = 0x60;
    pub const GATE_SCAN_CONTROL2: u16 = 0x61;
    pub const GATE_SCAN_CONTROL3: u16 = 0x6A;
    pub const PANEL_INTERFACE_CONTROL1: u16 = 0x90;
    pub const PANEL_INTERFACE_CONTROL2: u16 = 0x92;
    pub const PANEL_INTERFACE_CONTROL3: u16 = 0x93;
    pub const PANEL_INTERFACE_CONTROL4: u16 = 0x95;
    pub const PANEL_INTERFACE_CONTROL5: u16 = 0x97;
    pub const PANEL_INTERFACE_CONTROL6: u16 = 0x98;
}

/// DISPLAY_CONTROL1 with all outputs enabled
const DISPLAY_ON: u16 = 0x0133;
/// GATE_SCAN_CONTROL2 with REV set (normal image on normally-white glass)
const GATE_SCAN_NORMAL: u16 = 0x0003;
const GATE_SCAN_INVERTED: u16 = 0x0002;

pub static INIT: &[InitStep] = &[
    InitStep::Register16(reg::START_OSC, 0x0001),
    InitStep::Delay(50),
    InitStep::Register16(reg::DRIVER_OUTPUT_CONTROL, 0x0100),
    InitStep::Register16(reg::DRIVING_WAVE_CONTROL, 0x0700),
    InitStep::Register16(reg::ENTRY_MODE, 0x1030),
    InitStep::Register16(reg::RESIZE_CONTROL, 0x0000),
    InitStep::Register16(reg::DISPLAY_CONTROL2, 0x0202),
    InitStep::Register16(reg::DISPLAY_CONTROL3, 0x0000),
    InitStep::Register16(reg::DISPLAY_CONTROL4, 0x0000),
    InitStep::Register16(reg::RGB_INTERFACE_CONTROL1, 0x0000),
    InitStep::Register16(reg::FRAME_MARKER_POSITION, 0x0000),
    InitStep::Register16(reg::RGB_INTERFACE_CONTROL2, 0x0000),
    InitStep::Register16(reg::POWER_CONTROL1, 0x0000),
    InitStep::Register16(reg::POWER_CONTROL2, 0x0007),
    InitStep::Register16(reg::POWER_CONTROL3, 0x0000),
    InitStep::Register16(reg::POWER_CONTROL4, 0x0000),
    InitStep::Delay(200),
    InitStep::Register16(reg::POWER_CONTROL1, 0x1690),
    InitStep::Register16(reg::POWER_CONTROL2, 0x0227),
    InitStep::Delay(50),
    InitStep::Register16(reg::POWER_CONTROL3, 0x001A),
    InitStep::Delay(50),
    InitStep::Register16(reg::POWER_CONTROL4, 0x1800),
    InitStep::Register16(reg::POWER_CONTROL7, 0x002A),
    InitStep::Delay(50),
    InitStep::Register16(reg::GAMMA_CONTROL1, 0x0000),
    InitStep::Register16(reg::GAMMA_CONTROL2, 0x0000),
    InitStep::Register16(reg::GAMMA_CONTROL3, 0x0000),
    InitStep::Register16(reg::GAMMA_CONTROL4, 0x0206),
    InitStep::Register16(reg::GAMMA_CONTROL5, 0x0808),
    InitStep::Register16(reg::GAMMA_CONTROL6, 0x0007),
    InitStep::Register16(reg::GAMMA_CONTROL7, 0x0201),
    InitStep::Register16(reg::GAMMA_CONTROL8, 0x0000),
    InitStep::Register16(reg::GAMMA_CONTROL9, 0x0000),
    InitStep::Register16(reg::GAMMA_CONTROL10, 0x0000),
    InitStep::Register16(reg::GRAM_HORIZONTAL, 0x0000),
    InitStep::Register16(reg::GRAM_VERTICAL, 0x0000),
    InitStep::Register16(reg::HORIZONTAL_START, 0x0000),
    InitStep::Register16(reg::HORIZONTAL_END, 0x00EF),
    InitStep::Register16(reg::VERTICAL_START, 0x0000),
    InitStep::Register16(reg::VERTICAL_END, 0x013F),
    InitStep::Register16(reg::GATE_SCAN_CONTROL1, 0xA700),
    InitStep::Register16(reg::GATE_SCAN_CONTROL2, GATE_SCAN_NORMAL),
    InitStep::Register16(reg::GATE_SCAN_CONTROL3, 0x0000),
    InitStep::Register16(reg::PANEL_INTERFACE_CONTROL1, 0x0010),
    InitStep::Register16(reg::PANEL_INTERFACE_CONTROL2, 0x0000),
    InitStep::Register16(reg::PANEL_INTERFACE_CONTROL3, 0x0003),
    InitStep::Register16(reg::PANEL_INTERFACE_CONTROL4, 0x1100),
    InitStep::Register16(reg::PANEL_INTERFACE_CONTROL5, 0x0000),
    InitStep::Register16(reg::PANEL_INTERFACE_CONTROL6, 0x0000),
    InitStep::Register16(reg::DISPLAY_CONTROL1, DISPLAY_ON),
];

pub fn set_address_window<B, D>(bus: &mut BusContext<B, D>, w: AddressWindow)
where
    B: ParallelBus,
    D: DelayNs,
{
    bus.write_register16(reg::HORIZONTAL_START, w.x1);
    bus.write_register16(reg::HORIZONTAL_END, w.x2);
    bus.write_register16(reg::VERTICAL_START, w.y1);
    bus.write_register16(reg::VERTICAL_END, w.y2);
    bus.write_register16(reg::GRAM_HORIZONTAL, w.x1);
    bus.write_register16(reg::GRAM_VERTICAL, w.y1);
}

pub fn set_display_on<B, D>(bus: &mut BusContext<B, D>, on: bool)
where
    B: ParallelBus,
    D: DelayNs,
{
    bus.write_register16(reg::DISPLAY_CONTROL1, if on { DISPLAY_ON } else { 0x0000 });
}

pub fn set_inverted<B, D>(bus: &mut BusContext<B, D>, inverted: bool)
where
    B: ParallelBus,
    D: DelayNs,
{
    let value = if inverted {
        GATE_SCAN_INVERTED
    } else {
        GATE_SCAN_NORMAL
    };
    bus.write_register16(reg::GATE_SCAN_CONTROL2, value);
}
