//! Bus signalling primitives
//!
//! [`BusContext`] owns the board's [`ParallelBus`], the injected delay and
//! the current [`BusDirection`]. Every protocol routine runs through it, so
//! there is no global port state.
//!
//! Line levels (all active-low):
//!
//! | Line | Active            | Idle          |
//! |------|-------------------|---------------|
//! | CS   | low: selected     | high          |
//! | CD   | low: command      | high: data    |
//! | WR   | low, then release | high          |
//! | RD   | low, then release | high          |

use core::ops::{Deref, DerefMut};

use embedded_hal::delay::DelayNs;
use tftlcd_core::{BusDirection, BusTiming};
use tftlcd_hal::{Line, ParallelBus};

/// Owned bus state passed to every protocol routine
///
/// The bus is not reentrant: one transaction runs to completion, with CS
/// back at idle, before the next one starts.
pub struct BusContext<B, D> {
    bus: B,
    delay: D,
    timing: BusTiming,
    direction: BusDirection,
}

impl<B, D> BusContext<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    /// Wrap a bus without touching the hardware
    ///
    /// Call [`BusContext::reset`] before the first transfer.
    pub fn new(bus: B, delay: D, timing: BusTiming) -> Self {
        Self {
            bus,
            delay,
            timing,
            direction: BusDirection::Write,
        }
    }

    /// Current data bus direction
    pub fn direction(&self) -> BusDirection {
        self.direction
    }

    pub fn timing(&self) -> &BusTiming {
        &self.timing
    }

    /// Borrow the underlying bus
    pub fn inner(&self) -> &B {
        &self.bus
    }

    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give the bus and delay back
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Startup sequence: pin modes, idle levels, write mode, reset pulse
    pub fn reset(&mut self) {
        self.bus.configure();

        self.cs_idle();
        self.cd_data();
        self.bus.set_line(Line::Write, true);
        self.bus.set_line(Line::Read, true);

        self.set_direction_write();

        if self.bus.has_reset() {
            debug!("pulsing panel reset");
            let pulse = self.timing.reset_pulse_ms;
            self.bus.set_line(Line::Reset, true);
            self.delay.delay_ms(pulse);
            self.bus.set_line(Line::Reset, false);
            self.delay.delay_ms(pulse);
            self.bus.set_line(Line::Reset, true);
            self.delay.delay_ms(pulse);
        }
    }

    #[inline(always)]
    pub(crate) fn cs_active(&mut self) {
        self.bus.set_line(Line::ChipSelect, false);
    }

    #[inline(always)]
    pub(crate) fn cs_idle(&mut self) {
        self.bus.set_line(Line::ChipSelect, true);
    }

    #[inline(always)]
    pub(crate) fn cd_command(&mut self) {
        self.bus.set_line(Line::CommandData, false);
    }

    #[inline(always)]
    pub(crate) fn cd_data(&mut self) {
        self.bus.set_line(Line::CommandData, true);
    }

    /// Pulse WR low then high, latching whatever the port holds
    #[inline(always)]
    pub fn strobe_write(&mut self) {
        self.bus.set_line(Line::Write, false);
        if self.timing.strobe_ns > 0 {
            self.delay.delay_ns(self.timing.strobe_ns);
        }
        self.bus.set_line(Line::Write, true);
    }

    /// Drive `value` onto the port and strobe it into the panel
    ///
    /// CS and CD must already be set by the caller.
    #[inline(always)]
    pub fn write_byte(&mut self, value: u8) {
        self.bus.write_data(value);
        self.strobe_write();
    }

    /// Pulse RD and sample the port while it is low
    pub fn read_byte(&mut self) -> u8 {
        let hold = self.timing.read_strobe_us;
        self.bus.set_line(Line::Read, false);
        self.delay.delay_us(hold);
        let value = self.bus.read_data();
        self.delay.delay_us(hold);
        self.bus.set_line(Line::Read, true);
        self.delay.delay_us(hold);
        value
    }

    /// Data pins to outputs
    pub fn set_direction_write(&mut self) {
        self.bus.set_data_direction(BusDirection::Write);
        self.direction = BusDirection::Write;
    }

    /// Data pins to inputs
    pub fn set_direction_read(&mut self) {
        self.bus.set_data_direction(BusDirection::Read);
        self.direction = BusDirection::Read;
    }

    pub fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Turn the bus around for a read
    ///
    /// The returned guard releases CS and restores write direction when
    /// dropped, on every exit path.
    pub(crate) fn begin_read(&mut self) -> ReadGuard<'_, B, D> {
        self.set_direction_read();
        ReadGuard { ctx: self }
    }
}

/// Scope of a register read; see [`BusContext::begin_read`]
pub(crate) struct ReadGuard<'a, B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    ctx: &'a mut BusContext<B, D>,
}

impl<B, D> Deref for ReadGuard<'_, B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    type Target = BusContext<B, D>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<B, D> DerefMut for ReadGuard<'_, B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<B, D> Drop for ReadGuard<'_, B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    fn drop(&mut self) {
        self.ctx.cs_idle();
        self.ctx.set_direction_write();
    }
}
