//! Register read/write framing
//!
//! Every transaction starts with a 16-bit command sent high byte first
//! while CD is low, followed by data bytes, most significant first, while
//! CD is high. Writes return CS to idle; reads additionally turn the bus
//! back to write mode.

use embedded_hal::delay::DelayNs;
use tftlcd_hal::ParallelBus;

use crate::bus::BusContext;

impl<B, D> BusContext<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    /// Select the panel and send a command
    ///
    /// Leaves CS asserted so data bytes can follow.
    #[inline]
    pub fn write_command(&mut self, cmd: u16) {
        self.cs_active();
        self.cd_command();
        self.write_byte((cmd >> 8) as u8);
        self.write_byte(cmd as u8);
    }

    pub fn write_register8(&mut self, addr: u16, data: u8) {
        self.write_command(addr);
        self.cd_data();
        self.write_byte(data);
        self.cs_idle();
    }

    pub fn write_register16(&mut self, addr: u16, data: u16) {
        self.write_command(addr);
        self.cd_data();
        self.write_byte((data >> 8) as u8);
        self.write_byte(data as u8);
        self.cs_idle();
    }

    /// Write the low 24 bits of `data`
    pub fn write_register24(&mut self, addr: u16, data: u32) {
        self.write_command(addr);
        self.cd_data();
        self.write_byte((data >> 16) as u8);
        self.write_byte((data >> 8) as u8);
        self.write_byte(data as u8);
        self.cs_idle();
    }

    pub fn write_register32(&mut self, addr: u16, data: u32) {
        self.write_command(addr);
        self.cd_data();
        self.write_byte((data >> 24) as u8);
        self.write_byte((data >> 16) as u8);
        self.write_byte((data >> 8) as u8);
        self.write_byte(data as u8);
        self.cs_idle();
    }

    /// Write a 16-bit value split across two 8-bit registers
    pub fn write_register_pair(&mut self, addr_high: u16, addr_low: u16, data: u16) {
        self.write_register8(addr_high, (data >> 8) as u8);
        self.write_register8(addr_low, data as u8);
    }

    /// Command followed by an arbitrary parameter list
    pub fn write_register_bytes(&mut self, addr: u16, data: &[u8]) {
        self.write_command(addr);
        self.cd_data();
        for &byte in data {
            self.write_byte(byte);
        }
        self.cs_idle();
    }

    pub fn read_register16(&mut self, addr: u16) -> u16 {
        self.write_command(addr);
        let settle = self.timing().read16_settle_us;
        let mut bus = self.begin_read();
        bus.cd_data();
        bus.delay_us(settle);
        // Panels latch state between reads: keep one byte per step, MSB first.
        let mut value = bus.read_byte() as u16;
        value <<= 8;
        value |= bus.read_byte() as u16;
        value
    }

    pub fn read_register32(&mut self, addr: u16) -> u32 {
        self.write_command(addr);
        let settle = self.timing().read32_settle_us;
        let mut bus = self.begin_read();
        bus.cd_data();
        bus.delay_us(settle);
        let mut value = bus.read_byte() as u32;
        value <<= 8;
        value |= bus.read_byte() as u32;
        value <<= 8;
        value |= bus.read_byte() as u32;
        value <<= 8;
        value |= bus.read_byte() as u32;
        value
    }
}
