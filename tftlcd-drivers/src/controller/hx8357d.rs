//! HX8357D
//!
//! Vendor commands are locked until SETC is written with the key that
//! detection already sends; the init sequence sends it again after the
//! soft reset.

use super::dcs::{cmd, madctl, PIXEL_FORMAT_16BPP};
use super::InitStep;

/// HX8357D vendor commands
pub mod ext {
    pub const SET_OSC: u16 = 0xB0;
    pub const SET_POWER1: u16 = 0xB1;
    pub const SET_RGB: u16 = 0xB3;
    pub const SET_CYCLE: u16 = 0xB4;
    pub const SET_COM: u16 = 0xB6;
    pub const SET_EXTENDED: u16 = 0xB9;
    pub const SET_STBA: u16 = 0xC0;
    pub const SET_PANEL: u16 = 0xCC;
}

pub static INIT: &[InitStep] = &[
    InitStep::Command(cmd::SOFT_RESET, &[]),
    InitStep::Delay(10),
    InitStep::Command(ext::SET_EXTENDED, &[0xFF, 0x83, 0x57]),
    InitStep::Delay(300),
    InitStep::Command(ext::SET_RGB, &[0x80, 0x00, 0x06, 0x06]),
    InitStep::Command(ext::SET_COM, &[0x25]),
    InitStep::Command(ext::SET_OSC, &[0x68]),
    InitStep::Command(ext::SET_PANEL, &[0x05]),
    InitStep::Command(ext::SET_POWER1, &[0x00, 0x15, 0x1C, 0x1C, 0x83, 0xAA]),
    InitStep::Command(ext::SET_STBA, &[0x50, 0x50, 0x01, 0x3C, 0x1E, 0x08]),
    InitStep::Command(ext::SET_CYCLE, &[0x02, 0x40, 0x00, 0x2A, 0x2A, 0x0D, 0x78]),
    InitStep::Command(cmd::PIXEL_FORMAT, &[PIXEL_FORMAT_16BPP]),
    InitStep::Command(cmd::MEMORY_ACCESS_CONTROL, &[madctl::MX | madctl::MY]),
    InitStep::Command(cmd::TEARING_EFFECT_ON, &[0x00]),
    InitStep::Command(cmd::TEAR_SCANLINE, &[0x00, 0x02]),
    InitStep::Command(cmd::SLEEP_OUT, &[]),
    InitStep::Delay(150),
    InitStep::Command(cmd::DISPLAY_ON, &[]),
    InitStep::Delay(50),
];
