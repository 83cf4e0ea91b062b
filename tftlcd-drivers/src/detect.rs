//! Controller detection
//!
//! The probe order matters: older controllers answer the newer ID
//! commands with plausible garbage, so the distinctive signatures are
//! checked first and the legacy register 0x00 is the last resort.
//!
//! 1. Read 0xDB/0xDA (extended ID halves) and the 32-bit status at 0x04.
//! 2. 0x04 == `0xFF858552` → ST7789. This is an observed value, not a
//!    documented ID register; do not extend the pattern to other chips.
//! 3. 0x04 == `0x8000` → send HX8357D SETC, wait, and expect `0x990000`
//!    at 0xD0.
//! 4. Low 16 bits of 0xD3 == 0x9341 or 0x9338 → that ID.
//! 5. Otherwise the raw 16-bit value of register 0x00.

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use tftlcd_core::ControllerId;
use tftlcd_hal::ParallelBus;

use crate::bus::BusContext;

/// Registers read while probing
pub mod reg {
    /// Extended ID, high half
    pub const EXTENDED_ID_HIGH: u16 = 0xDB;
    /// Extended ID, low half
    pub const EXTENDED_ID_LOW: u16 = 0xDA;
    /// Display status
    pub const STATUS: u16 = 0x04;
    /// HX8357D confirmation register read after SETC
    pub const SETC_CONFIRM: u16 = 0xD0;
    /// ID4 on MIPI DCS controllers
    pub const ID4: u16 = 0xD3;
    /// Driver code on ILI932x/HX8347 style controllers
    pub const LEGACY_ID: u16 = 0x00;
}

/// Status value reported by ST7789 panels
pub const ST7789_STATUS: u32 = 0xFF85_8552;
/// Status value reported by HX8357 panels before SETC
pub const HX8357_STATUS: u32 = 0x8000;
/// HX8357D "set extended command" opcode
pub const HX8357D_SETC: u16 = 0xB9;
/// SETC unlock key
pub const HX8357D_SETC_KEY: u32 = 0xFF_8357;
/// Expected 0xD0 value once SETC is applied
pub const HX8357D_CONFIRMATION: u32 = 0x99_0000;

/// Maximum number of reads a probe performs
pub const MAX_PROBE_READS: usize = 6;

/// One register read performed while probing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeReading {
    pub register: u16,
    pub value: u32,
}

/// Result of a detection run, with every value read along the way
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeReport {
    pub id: ControllerId,
    pub readings: Vec<ProbeReading, MAX_PROBE_READS>,
}

impl ProbeReport {
    fn new() -> Self {
        Self {
            id: ControllerId(0),
            readings: Vec::new(),
        }
    }

    fn record(&mut self, register: u16, value: u32) {
        debug!("probe reg {=u16:#x} = {=u32:#x}", register, value);
        // Capacity covers the longest probe path
        let _ = self.readings.push(ProbeReading { register, value });
    }

    /// Value read from `register`, if it was probed
    pub fn reading(&self, register: u16) -> Option<u32> {
        self.readings
            .iter()
            .find(|r| r.register == register)
            .map(|r| r.value)
    }
}

impl<B, D> BusContext<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    /// Reset the panel and identify its controller
    pub fn read_id(&mut self) -> ControllerId {
        self.probe().id
    }

    /// Reset the panel and run the detection sequence, keeping every read
    pub fn probe(&mut self) -> ProbeReport {
        self.reset();
        let mut report = ProbeReport::new();

        let high = self.read_register16(reg::EXTENDED_ID_HIGH);
        report.record(reg::EXTENDED_ID_HIGH, high as u32);
        let low = self.read_register16(reg::EXTENDED_ID_LOW);
        report.record(reg::EXTENDED_ID_LOW, low as u32);

        let status = self.read_register32(reg::STATUS);
        report.record(reg::STATUS, status);

        if status == ST7789_STATUS {
            report.id = ControllerId::ST7789;
            return report;
        }

        if status == HX8357_STATUS {
            self.write_register24(HX8357D_SETC, HX8357D_SETC_KEY);
            let settle = self.timing().extended_command_settle_ms;
            self.delay_ms(settle);
            let confirm = self.read_register32(reg::SETC_CONFIRM);
            report.record(reg::SETC_CONFIRM, confirm);
            if confirm == HX8357D_CONFIRMATION {
                report.id = ControllerId::HX8357D;
                return report;
            }
        }

        let id4 = self.read_register32(reg::ID4);
        report.record(reg::ID4, id4);
        // Only the low half carries the part number
        let id4 = ControllerId(id4 as u16);
        if id4 == ControllerId::ILI9341 || id4 == ControllerId::ILI9338 {
            report.id = id4;
            return report;
        }

        let legacy = self.read_register16(reg::LEGACY_ID);
        report.record(reg::LEGACY_ID, legacy as u32);
        report.id = ControllerId(legacy);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimDelay, SimPanel, Transfer};
    use tftlcd_core::{BusDirection, BusTiming};

    fn detect(sim: SimPanel) -> (ProbeReport, SimPanel, SimDelay) {
        let mut bus = BusContext::new(sim, SimDelay::default(), BusTiming::default());
        let report = bus.probe();
        assert_eq!(bus.direction(), BusDirection::Write);
        let (sim, delay) = bus.release();
        assert!(sim.violations().is_empty(), "{:?}", sim.violations());
        (report, sim, delay)
    }

    #[test]
    fn test_st7789_status_sentinel() {
        let mut sim = SimPanel::new();
        sim.respond(reg::STATUS, &[0xFF, 0x85, 0x85, 0x52]);
        let (report, sim, _) = detect(sim);

        assert_eq!(report.id, ControllerId::ST7789);
        assert_eq!(report.readings.len(), 3);
        assert_eq!(report.reading(reg::STATUS), Some(ST7789_STATUS));
        // Stops before any later probe
        assert_eq!(report.reading(reg::ID4), None);
        assert_eq!(sim.register(HX8357D_SETC), None);
    }

    #[test]
    fn test_hx8357d_setc_confirmed() {
        let mut sim = SimPanel::new();
        sim.respond(reg::STATUS, &[0x00, 0x00, 0x80, 0x00]);
        sim.respond_after(HX8357D_SETC, reg::SETC_CONFIRM, &[0x00, 0x99, 0x00, 0x00]);
        let (report, sim, delay) = detect(sim);

        assert_eq!(report.id, ControllerId::HX8357D);
        assert_eq!(sim.register(HX8357D_SETC), Some(&[0xFF, 0x83, 0x57][..]));
        // 3 x 100 ms reset pulse + 300 ms SETC settle
        assert!(delay.total_ms() >= 600);
    }

    #[test]
    fn test_hx8357_status_without_confirmation_falls_through() {
        let mut sim = SimPanel::new();
        sim.respond(reg::STATUS, &[0x00, 0x00, 0x80, 0x00]);
        sim.respond(reg::ID4, &[0x00, 0x00, 0x93, 0x41]);
        let (report, _, _) = detect(sim);

        assert_eq!(report.id, ControllerId::ILI9341);
        assert_eq!(report.reading(reg::SETC_CONFIRM), Some(0xFFFF_FFFF));
    }

    #[test]
    fn test_id4_ili9341() {
        let mut sim = SimPanel::new();
        sim.respond(reg::ID4, &[0x00, 0x00, 0x93, 0x41]);
        let (report, _, _) = detect(sim);
        assert_eq!(report.id, ControllerId::ILI9341);
        assert_eq!(report.reading(reg::LEGACY_ID), None);
    }

    #[test]
    fn test_id4_ili9338() {
        let mut sim = SimPanel::new();
        sim.respond(reg::ID4, &[0x00, 0x00, 0x93, 0x38]);
        let (report, _, _) = detect(sim);
        assert_eq!(report.id, ControllerId::ILI9338);
    }

    #[test]
    fn test_legacy_fallback() {
        let mut sim = SimPanel::new();
        sim.respond(reg::LEGACY_ID, &[0x93, 0x25]);
        let (report, _, _) = detect(sim);
        assert_eq!(report.id, ControllerId::ILI9325);
        assert_eq!(report.readings.len(), 5);
    }

    #[test]
    fn test_unknown_panel_reports_raw_legacy_value() {
        let mut sim = SimPanel::new();
        sim.respond(reg::LEGACY_ID, &[0x00, 0x00]);
        let (report, _, _) = detect(sim);
        assert_eq!(report.id, ControllerId(0x0000));
    }

    #[test]
    fn test_probe_order() {
        let mut sim = SimPanel::new();
        sim.respond(reg::LEGACY_ID, &[0x75, 0x75]);
        let (report, sim, _) = detect(sim);

        assert_eq!(report.id, ControllerId::HX8347G);
        let order: heapless::Vec<u16, MAX_PROBE_READS> =
            report.readings.iter().map(|r| r.register).collect();
        assert_eq!(
            order.as_slice(),
            &[
                reg::EXTENDED_ID_HIGH,
                reg::EXTENDED_ID_LOW,
                reg::STATUS,
                reg::ID4,
                reg::LEGACY_ID
            ]
        );
        // Only command bytes were written: no SETC on this path
        assert!(sim
            .transfers()
            .iter()
            .all(|t| matches!(t, Transfer::Command(_))));
    }

    #[test]
    fn test_read_id_matches_probe() {
        let mut sim = SimPanel::new();
        sim.respond(reg::ID4, &[0x00, 0x00, 0x93, 0x41]);
        let mut bus = BusContext::new(sim, SimDelay::default(), BusTiming::zero());
        assert_eq!(bus.read_id(), ControllerId::ILI9341);
    }
}
