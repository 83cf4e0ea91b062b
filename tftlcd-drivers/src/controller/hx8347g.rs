//! HX8347G
//!
//! 8-bit registers; 16-bit window coordinates are split across high/low
//! register pairs.

use embedded_hal::delay::DelayNs;
use tftlcd_core::AddressWindow;
use tftlcd_hal::ParallelBus;

use super::InitStep;
use crate::bus::BusContext;

/// HX8347G register addresses
pub mod reg {
    pub const DISPLAY_MODE: u16 = 0x01;
    pub const COLUMN_START_HIGH: u16 = 0x02;
    pub const COLUMN_START_LOW: u16 = 0x03;
    pub const COLUMN_END_HIGH: u16 = 0x04;
    pub const COLUMN_END_LOW: u16 = 0x05;
    pub const ROW_START_HIGH: u16 = 0x06;
    pub const ROW_START_LOW: u16 = 0x07;
    pub const ROW_END_HIGH: u16 = 0x08;
    pub const ROW_END_LOW: u16 = 0x09;
    /// GRAM data port
    pub const GRAM_DATA: u16 = 0x22;
    pub const DISPLAY_CONTROL: u16 = 0x28;
}

/// DISPLAY_MODE inversion bit
const INVERT_ON: u8 = 0x02;
const DISPLAY_ON: u8 = 0x3C;
const DISPLAY_OFF: u8 = 0x38;

/// Register/value pairs with the power-up delays the panel needs
pub static INIT: &[InitStep] = &[
    InitStep::Command(0x2E, &[0x89]),
    InitStep::Command(0x29, &[0x8F]),
    InitStep::Command(0x2B, &[0x02]),
    InitStep::Command(0xE2, &[0x00]),
    InitStep::Command(0xE4, &[0x01]),
    InitStep::Command(0xE5, &[0x10]),
    InitStep::Command(0xE6, &[0x01]),
    InitStep::Command(0xE7, &[0x10]),
    InitStep::Command(0xE8, &[0x70]),
    InitStep::Command(0xF2, &[0x00]),
    InitStep::Command(0xEA, &[0x00]),
    InitStep::Command(0xEB, &[0x20]),
    InitStep::Command(0xEC, &[0x3C]),
    InitStep::Command(0xED, &[0xC8]),
    InitStep::Command(0xE9, &[0x38]),
    InitStep::Command(0xF1, &[0x01]),
    InitStep::Command(0x1B, &[0x1A]),
    InitStep::Command(0x1A, &[0x02]),
    InitStep::Command(0x24, &[0x61]),
    InitStep::Command(0x25, &[0x5C]),
    InitStep::Command(0x18, &[0x36]),
    InitStep::Command(0x19, &[0x01]),
    InitStep::Command(0x1F, &[0x88]),
    InitStep::Delay(5),
    InitStep::Command(0x1F, &[0x80]),
    InitStep::Delay(5),
    InitStep::Command(0x1F, &[0x90]),
    InitStep::Delay(5),
    InitStep::Command(0x1F, &[0xD4]),
    InitStep::Delay(5),
    InitStep::Command(0x17, &[0x05]),
    InitStep::Command(0x36, &[0x09]),
    InitStep::Command(reg::DISPLAY_CONTROL, &[DISPLAY_OFF]),
    InitStep::Delay(40),
    InitStep::Command(reg::DISPLAY_CONTROL, &[DISPLAY_ON]),
    InitStep::Command(reg::COLUMN_START_HIGH, &[0x00]),
    InitStep::Command(reg::COLUMN_START_LOW, &[0x00]),
    InitStep::Command(reg::COLUMN_END_HIGH, &[0x00]),
    InitStep::Command(reg::COLUMN_END_LOW, &[0xEF]),
    InitStep::Command(reg::ROW_START_HIGH, &[0x00]),
    InitStep::Command(reg::ROW_START_LOW, &[0x00]),
    InitStep::Command(reg::ROW_END_HIGH, &[0x01]),
    InitStep::Command(reg::ROW_END_LOW, &[0x3F]),
];

pub fn set_address_window<B, D>(bus: &mut BusContext<B, D>, w: AddressWindow)
where
    B: ParallelBus,
    D: DelayNs,
{
    bus.write_register_pair(reg::COLUMN_START_HIGH, reg::COLUMN_START_LOW, w.x1);
    bus.write_register_pair(reg::ROW_START_HIGH, reg::ROW_START_LOW, w.y1);
    bus.write_register_pair(reg::COLUMN_END_HIGH, reg::COLUMN_END_LOW, w.x2);
    bus.write_register_pair(reg::ROW_END_HIGH, reg::ROW_END_LOW, w.y2);
}

pub fn set_display_on<B, D>(bus: &mut BusContext<B, D>, on: bool)
where
    B: ParallelBus,
    D: DelayNs,
{
    bus.write_register8(reg::DISPLAY_CONTROL, if on { DISPLAY_ON } else { DISPLAY_OFF });
}

pub fn set_inverted<B, D>(bus: &mut BusContext<B, D>, inverted: bool)
where
    B: ParallelBus,
    D: DelayNs,
{
    bus.write_register8(reg::DISPLAY_MODE, if inverted { INVERT_ON } else { 0x00 });
}
