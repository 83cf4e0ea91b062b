//! Simulated panel for host tests
//!
//! [`SimPanel`] implements [`ParallelBus`] by tracking line levels and
//! latching the port on every WR rising edge, the way real silicon does.
//! It decodes the 16-bit command framing, keeps a register file that
//! answers reads, models GRAM with window auto-increment for each command
//! dialect, and records discipline violations (bytes moved with CS idle,
//! writes while the bus is turned around, reads in write mode).

extern crate std;

use std::collections::BTreeMap;
use std::vec;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use tftlcd_core::{AddressWindow, BusDirection, Geometry};
use tftlcd_hal::{Line, ParallelBus};

/// One byte latched by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transfer {
    Command(u8),
    Data(u8),
}

/// How the simulated controller addresses GRAM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    /// CASET 0x2A / PASET 0x2B / RAMWR 0x2C
    Dcs,
    /// Window 0x50-0x53, cursor 0x20/0x21, GRAM 0x22
    Ili932x,
    /// Byte pairs 0x02-0x09, GRAM 0x22
    Hx8347g,
}

impl Dialect {
    fn gram_command(self) -> u16 {
        match self {
            Self::Dcs => 0x2C,
            Self::Ili932x | Self::Hx8347g => 0x22,
        }
    }
}

pub(crate) struct SimPanel {
    cs: bool,
    cd: bool,
    wr: bool,
    rd: bool,
    rst: bool,
    has_reset: bool,
    configured: bool,
    port: u8,
    direction: BusDirection,

    transfers: Vec<Transfer>,
    transactions: usize,
    violations: Vec<&'static str>,
    reset_pulses: u32,

    cmd_bytes: Vec<u8>,
    current: Option<u16>,
    data: Vec<u8>,
    read_index: usize,
    registers: BTreeMap<u16, Vec<u8>>,
    responses: BTreeMap<u16, Vec<u8>>,
    armed: Vec<(u16, u16, Vec<u8>)>,

    dialect: Dialect,
    geometry: Geometry,
    gram: Vec<u16>,
    window: AddressWindow,
    cursor: (u16, u16),
    pixel_hi: Option<u8>,
    pixels: Vec<u16>,
}

impl SimPanel {
    pub fn new() -> Self {
        Self::with_dialect(Dialect::Dcs, Geometry::new(240, 320))
    }

    pub fn with_dialect(dialect: Dialect, geometry: Geometry) -> Self {
        Self {
            cs: true,
            cd: true,
            wr: true,
            rd: true,
            rst: true,
            has_reset: true,
            configured: false,
            port: 0,
            direction: BusDirection::Write,
            transfers: Vec::new(),
            transactions: 0,
            violations: Vec::new(),
            reset_pulses: 0,
            cmd_bytes: Vec::new(),
            current: None,
            data: Vec::new(),
            read_index: 0,
            registers: BTreeMap::new(),
            responses: BTreeMap::new(),
            armed: Vec::new(),
            dialect,
            geometry,
            gram: vec![0; geometry.pixel_count() as usize],
            window: geometry.full_window(),
            cursor: (0, 0),
            pixel_hi: None,
            pixels: Vec::new(),
        }
    }

    pub fn without_reset_line(mut self) -> Self {
        self.has_reset = false;
        self
    }

    /// Answer reads of `cmd` with `bytes`
    pub fn respond(&mut self, cmd: u16, bytes: &[u8]) {
        self.responses.insert(cmd, bytes.to_vec());
    }

    /// Start answering reads of `cmd` once `trigger` has been written
    pub fn respond_after(&mut self, trigger: u16, cmd: u16, bytes: &[u8]) {
        self.armed.push((trigger, cmd, bytes.to_vec()));
    }

    pub fn line(&self, line: Line) -> bool {
        match line {
            Line::ChipSelect => self.cs,
            Line::CommandData => self.cd,
            Line::Write => self.wr,
            Line::Read => self.rd,
            Line::Reset => self.rst,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn reset_pulses(&self) -> u32 {
        self.reset_pulses
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn data_bytes(&self) -> Vec<u8> {
        self.transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Data(b) => Some(*b),
                Transfer::Command(_) => None,
            })
            .collect()
    }

    /// Number of CS assertions seen
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    pub fn violations(&self) -> &[&'static str] {
        &self.violations
    }

    /// Last parameter bytes written to `cmd`
    pub fn register(&self, cmd: u16) -> Option<&[u8]> {
        self.registers.get(&cmd).map(|v| v.as_slice())
    }

    /// Every pixel streamed to GRAM, in order
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn gram(&self) -> &[u16] {
        &self.gram
    }

    pub fn pixel_at(&self, x: u16, y: u16) -> u16 {
        self.gram[y as usize * self.geometry.width as usize + x as usize]
    }

    pub fn window(&self) -> AddressWindow {
        self.window
    }

    pub fn clear_log(&mut self) {
        self.transfers.clear();
        self.pixels.clear();
        self.transactions = 0;
    }

    fn latch(&mut self) {
        if self.cs {
            self.violations.push("byte written with CS idle");
            return;
        }
        if self.direction == BusDirection::Read {
            self.violations.push("byte written in read mode");
            return;
        }
        let byte = self.port;
        if self.cd {
            self.transfers.push(Transfer::Data(byte));
            self.on_data(byte);
        } else {
            self.transfers.push(Transfer::Command(byte));
            self.on_command_byte(byte);
        }
    }

    fn on_command_byte(&mut self, byte: u8) {
        self.cmd_bytes.push(byte);
        if self.cmd_bytes.len() < 2 {
            return;
        }
        let cmd = ((self.cmd_bytes[0] as u16) << 8) | self.cmd_bytes[1] as u16;
        self.cmd_bytes.clear();
        self.current = Some(cmd);
        self.data.clear();
        self.read_index = 0;
        self.pixel_hi = None;

        if cmd == self.dialect.gram_command() && self.dialect != Dialect::Ili932x {
            self.cursor = (self.window.x1, self.window.y1);
        }
    }

    fn on_data(&mut self, byte: u8) {
        let Some(cmd) = self.current else {
            self.violations.push("data without command");
            return;
        };

        if cmd == self.dialect.gram_command() {
            match self.pixel_hi.take() {
                None => self.pixel_hi = Some(byte),
                Some(hi) => self.store_pixel(((hi as u16) << 8) | byte as u16),
            }
            return;
        }

        self.data.push(byte);
        self.registers.insert(cmd, self.data.clone());

        let mut i = 0;
        while i < self.armed.len() {
            if self.armed[i].0 == cmd {
                let (_, target, bytes) = self.armed.remove(i);
                self.responses.insert(target, bytes);
            } else {
                i += 1;
            }
        }

        self.apply_addressing(cmd);
    }

    fn reg16(&self, cmd: u16) -> Option<u16> {
        let bytes = self.registers.get(&cmd)?;
        if bytes.len() < 2 {
            return None;
        }
        Some(((bytes[0] as u16) << 8) | bytes[1] as u16)
    }

    fn reg8(&self, cmd: u16) -> u16 {
        self.registers
            .get(&cmd)
            .and_then(|b| b.first().copied())
            .unwrap_or(0) as u16
    }

    fn apply_addressing(&mut self, cmd: u16) {
        match self.dialect {
            Dialect::Dcs => {
                if self.data.len() != 4 {
                    return;
                }
                let a = ((self.data[0] as u16) << 8) | self.data[1] as u16;
                let b = ((self.data[2] as u16) << 8) | self.data[3] as u16;
                match cmd {
                    0x2A => {
                        self.window.x1 = a;
                        self.window.x2 = b;
                    }
                    0x2B => {
                        self.window.y1 = a;
                        self.window.y2 = b;
                    }
                    _ => {}
                }
            }
            Dialect::Ili932x => {
                if self.data.len() != 2 {
                    return;
                }
                let v = self.reg16(cmd).unwrap_or(0);
                match cmd {
                    0x50 => self.window.x1 = v,
                    0x51 => self.window.x2 = v,
                    0x52 => self.window.y1 = v,
                    0x53 => self.window.y2 = v,
                    0x20 => self.cursor.0 = v,
                    0x21 => self.cursor.1 = v,
                    _ => {}
                }
            }
            Dialect::Hx8347g => {
                if (0x02..=0x09).contains(&cmd) {
                    self.window = AddressWindow::new(
                        (self.reg8(0x02) << 8) | self.reg8(0x03),
                        (self.reg8(0x06) << 8) | self.reg8(0x07),
                        (self.reg8(0x04) << 8) | self.reg8(0x05),
                        (self.reg8(0x08) << 8) | self.reg8(0x09),
                    );
                }
            }
        }
    }

    fn store_pixel(&mut self, value: u16) {
        self.pixels.push(value);
        let (x, y) = self.cursor;
        if x < self.geometry.width && y < self.geometry.height {
            self.gram[y as usize * self.geometry.width as usize + x as usize] = value;
        } else {
            self.violations.push("pixel outside GRAM");
        }

        let w = self.window;
        let mut x = x + 1;
        let mut y = y;
        if x > w.x2 {
            x = w.x1;
            y += 1;
            if y > w.y2 {
                y = w.y1;
            }
        }
        self.cursor = (x, y);
    }

    fn sample(&mut self) -> u8 {
        let Some(cmd) = self.current else {
            return 0xFF;
        };
        let source = self.responses.get(&cmd).or_else(|| self.registers.get(&cmd));
        source
            .and_then(|bytes| bytes.get(self.read_index).copied())
            .unwrap_or(0xFF)
    }
}

impl ParallelBus for SimPanel {
    fn configure(&mut self) {
        self.configured = true;
    }

    fn set_line(&mut self, line: Line, high: bool) {
        match line {
            Line::ChipSelect => {
                if self.cs && !high {
                    if self.direction == BusDirection::Read {
                        self.violations.push("CS asserted in read mode");
                    }
                    self.transactions += 1;
                    self.cmd_bytes.clear();
                }
                self.cs = high;
            }
            Line::CommandData => self.cd = high,
            Line::Write => {
                if !self.wr && high {
                    self.latch();
                }
                self.wr = high;
            }
            Line::Read => {
                if !self.rd && high {
                    self.read_index += 1;
                }
                self.rd = high;
            }
            Line::Reset => {
                if self.has_reset {
                    if !self.rst && high {
                        self.reset_pulses += 1;
                    }
                    self.rst = high;
                }
            }
        }
    }

    fn has_reset(&self) -> bool {
        self.has_reset
    }

    fn write_data(&mut self, value: u8) {
        self.port = value;
    }

    fn read_data(&mut self) -> u8 {
        if self.direction != BusDirection::Read {
            self.violations.push("read in write mode");
        }
        if self.cs {
            self.violations.push("read with CS idle");
        }
        if self.rd {
            self.violations.push("sampled without RD strobe");
        }
        self.sample()
    }

    fn set_data_direction(&mut self, direction: BusDirection) {
        self.direction = direction;
    }
}

/// Delay that only accumulates the requested time
#[derive(Debug, Default)]
pub(crate) struct SimDelay {
    total_ns: u64,
}

impl SimDelay {
    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
