//! ST7789

use super::dcs::{cmd, PIXEL_FORMAT_16BPP};
use super::InitStep;

/// ST7789 panel and power commands
pub mod ext {
    pub const PORCH_CONTROL: u16 = 0xB2;
    pub const GATE_CONTROL: u16 = 0xB7;
    pub const VCOM_SETTING: u16 = 0xBB;
    pub const LCM_CONTROL: u16 = 0xC0;
    pub const VDV_VRH_ENABLE: u16 = 0xC2;
    pub const VRH_SET: u16 = 0xC3;
    pub const VDV_SET: u16 = 0xC4;
    pub const FRAME_RATE_CONTROL2: u16 = 0xC6;
    pub const POWER_CONTROL1: u16 = 0xD0;
}

pub static INIT: &[InitStep] = &[
    InitStep::Command(cmd::SOFT_RESET, &[]),
    InitStep::Delay(150),
    InitStep::Command(cmd::SLEEP_OUT, &[]),
    InitStep::Delay(120),
    InitStep::Command(cmd::PIXEL_FORMAT, &[PIXEL_FORMAT_16BPP]),
    InitStep::Delay(10),
    InitStep::Command(cmd::MEMORY_ACCESS_CONTROL, &[0x00]),
    InitStep::Command(ext::PORCH_CONTROL, &[0x0C, 0x0C, 0x00, 0x33, 0x33]),
    InitStep::Command(ext::GATE_CONTROL, &[0x35]),
    InitStep::Command(ext::VCOM_SETTING, &[0x19]),
    InitStep::Command(ext::LCM_CONTROL, &[0x2C]),
    InitStep::Command(ext::VDV_VRH_ENABLE, &[0x01]),
    InitStep::Command(ext::VRH_SET, &[0x12]),
    InitStep::Command(ext::VDV_SET, &[0x20]),
    InitStep::Command(ext::FRAME_RATE_CONTROL2, &[0x0F]),
    InitStep::Command(ext::POWER_CONTROL1, &[0xA4, 0xA1]),
    // IPS glass: colors are only right with inversion on
    InitStep::Command(cmd::INVERT_ON, &[]),
    InitStep::Delay(10),
    InitStep::Command(cmd::NORMAL_MODE, &[]),
    InitStep::Delay(10),
    InitStep::Command(cmd::DISPLAY_ON, &[]),
    InitStep::Delay(120),
];
