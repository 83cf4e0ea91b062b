//! ILI9341 (also answers for ILI9338)

use super::dcs::{cmd, madctl, PIXEL_FORMAT_16BPP};
use super::InitStep;

/// ILI9341 extended commands
pub mod ext {
    pub const FRAME_CONTROL: u16 = 0xB1;
    pub const DISPLAY_FUNCTION: u16 = 0xB6;
    pub const ENTRY_MODE: u16 = 0xB7;
    pub const POWER_CONTROL1: u16 = 0xC0;
    pub const POWER_CONTROL2: u16 = 0xC1;
    pub const VCOM_CONTROL1: u16 = 0xC5;
    pub const VCOM_CONTROL2: u16 = 0xC7;
}

pub static INIT: &[InitStep] = &[
    InitStep::Command(cmd::SOFT_RESET, &[]),
    InitStep::Delay(50),
    InitStep::Command(cmd::DISPLAY_OFF, &[]),
    InitStep::Command(ext::POWER_CONTROL1, &[0x23]),
    InitStep::Command(ext::POWER_CONTROL2, &[0x10]),
    InitStep::Command(ext::VCOM_CONTROL1, &[0x2B, 0x2B]),
    InitStep::Command(ext::VCOM_CONTROL2, &[0xC0]),
    InitStep::Command(cmd::MEMORY_ACCESS_CONTROL, &[madctl::MY | madctl::BGR]),
    InitStep::Command(cmd::PIXEL_FORMAT, &[PIXEL_FORMAT_16BPP]),
    InitStep::Command(ext::FRAME_CONTROL, &[0x00, 0x1B]),
    InitStep::Command(ext::ENTRY_MODE, &[0x07]),
    InitStep::Command(cmd::SLEEP_OUT, &[]),
    InitStep::Delay(150),
    InitStep::Command(cmd::DISPLAY_ON, &[]),
    InitStep::Delay(500),
];
