//! Pixel streaming
//!
//! Everything that puts pixels on the panel funnels through two paths:
//! [`TftLcd::flood`] repeats one color, [`TftLcd::push_colors`] streams a
//! slice. Both write into whatever window was set last.
//!
//! When a color's high and low bytes are equal the data port already
//! holds the right value after the first byte, so the fill loop only
//! toggles WR. That is the single hot path of the driver.

use embedded_hal::delay::DelayNs;
use tftlcd_core::{AddressWindow, GraphicsTarget, Rgb565};
use tftlcd_hal::ParallelBus;

use crate::controller::PanelController;
use crate::driver::TftLcd;

/// Pixels per unrolled fill block
const FLOOD_BLOCK: u32 = 64;

impl<B, D> TftLcd<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    /// Program the GRAM window for the next transfer
    ///
    /// The window is passed through as given; callers keep it on-panel.
    pub fn set_address_window(&mut self, window: AddressWindow) {
        self.kind.set_address_window(&mut self.bus, window);
    }

    /// Write `color` to the next `count` pixels of the current window
    pub fn flood(&mut self, color: Rgb565, count: u32) {
        self.flood_with(color, count, true);
    }

    pub(crate) fn flood_with(&mut self, color: Rgb565, count: u32, strobe_only: bool) {
        if count == 0 {
            return;
        }
        let (hi, lo) = (color.hi(), color.lo());
        let symmetric = color.is_byte_symmetric();
        let kind = self.kind;
        let bus = &mut self.bus;

        kind.issue_preamble(bus);
        bus.cd_data();
        bus.write_byte(hi);
        bus.write_byte(lo);

        let rest = count - 1;
        let blocks = rest / FLOOD_BLOCK;
        let tail = rest % FLOOD_BLOCK;

        if strobe_only && symmetric {
            for _ in 0..blocks {
                for _ in 0..16 {
                    // 4 pixels
                    bus.strobe_write();
                    bus.strobe_write();
                    bus.strobe_write();
                    bus.strobe_write();
                    bus.strobe_write();
                    bus.strobe_write();
                    bus.strobe_write();
                    bus.strobe_write();
                }
            }
            for _ in 0..tail {
                bus.strobe_write();
                bus.strobe_write();
            }
        } else {
            for _ in 0..blocks {
                for _ in 0..16 {
                    bus.write_byte(hi);
                    bus.write_byte(lo);
                    bus.write_byte(hi);
                    bus.write_byte(lo);
                    bus.write_byte(hi);
                    bus.write_byte(lo);
                    bus.write_byte(hi);
                    bus.write_byte(lo);
                }
            }
            for _ in 0..tail {
                bus.write_byte(hi);
                bus.write_byte(lo);
            }
        }
        bus.cs_idle();
    }

    /// Stream `colors` into the current window
    ///
    /// `first` sends the GRAM preamble; later chunks of the same transfer
    /// pass `false` and continue from the controller's write pointer.
    pub fn push_colors(&mut self, colors: &[Rgb565], first: bool) {
        self.push_iter(colors.iter().copied(), first);
    }

    pub(crate) fn push_iter<I>(&mut self, colors: I, first: bool)
    where
        I: IntoIterator<Item = Rgb565>,
    {
        let kind = self.kind;
        let bus = &mut self.bus;
        if first {
            kind.issue_preamble(bus);
        } else {
            bus.cs_active();
        }
        bus.cd_data();
        for color in colors {
            bus.write_byte(color.hi());
            bus.write_byte(color.lo());
        }
        bus.cs_idle();
    }

    /// Set one pixel; off-panel coordinates are dropped
    pub fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb565) {
        if !self.geometry.contains(x, y) {
            return;
        }
        self.set_address_window(AddressWindow::pixel(x as u16, y as u16));
        self.flood(color, 1);
    }

    pub fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        if let Some(window) = self.geometry.clip_rect(x, y, w, h) {
            self.fill_window(window, color);
        }
    }

    pub fn draw_fast_hline(&mut self, x: i16, y: i16, length: i16, color: Rgb565) {
        if let Some(window) = self.geometry.clip_hline(x, y, length) {
            self.fill_window(window, color);
        }
    }

    pub fn draw_fast_vline(&mut self, x: i16, y: i16, length: i16, color: Rgb565) {
        if let Some(window) = self.geometry.clip_vline(x, y, length) {
            self.fill_window(window, color);
        }
    }

    pub fn fill_screen(&mut self, color: Rgb565) {
        let full = self.geometry.full_window();
        self.fill_window(full, color);
    }

    fn fill_window(&mut self, window: AddressWindow, color: Rgb565) {
        self.set_address_window(window);
        self.flood(color, window.area());
    }

    /// Blit a `w` x `h` row-major bitmap with its top-left at (`x`, `y`)
    ///
    /// A bitmap entirely on the panel goes out as one window and one
    /// stream; anything else is drawn pixel by pixel with clipping.
    pub fn draw_bitmap(&mut self, x: i16, y: i16, w: i16, h: i16, bitmap: &[Rgb565]) {
        let Some(pixels) = bitmap_pixels(w, h, bitmap) else {
            return;
        };
        if self.geometry.contains_rect(x, y, w, h) {
            let x1 = x as u16;
            let y1 = y as u16;
            let window = AddressWindow::new(x1, y1, x1 + (w as u16 - 1), y1 + (h as u16 - 1));
            self.set_address_window(window);
            self.push_colors(pixels, true);
        } else {
            self.draw_bitmap_per_pixel(x, y, w, pixels);
        }
    }

    pub(crate) fn draw_bitmap_per_pixel(&mut self, x: i16, y: i16, w: i16, pixels: &[Rgb565]) {
        let w = w as usize;
        for (i, &color) in pixels.iter().enumerate() {
            let px = x as i32 + (i % w) as i32;
            let py = y as i32 + (i / w) as i32;
            if let (Ok(px), Ok(py)) = (i16::try_from(px), i16::try_from(py)) {
                self.draw_pixel(px, py, color);
            }
        }
    }
}

/// The first `w * h` entries of `bitmap`, if the shape is drawable
fn bitmap_pixels(w: i16, h: i16, bitmap: &[Rgb565]) -> Option<&[Rgb565]> {
    if w <= 0 || h <= 0 {
        return None;
    }
    let count = w as usize * h as usize;
    let pixels = bitmap.get(..count);
    if pixels.is_none() {
        warn!("bitmap holds {} pixels, {}x{} needs {}", bitmap.len(), w, h, count);
    }
    pixels
}

impl<B, D> GraphicsTarget for TftLcd<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    fn width(&self) -> u16 {
        self.geometry.width
    }

    fn height(&self) -> u16 {
        self.geometry.height
    }

    fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb565) {
        TftLcd::draw_pixel(self, x, y, color);
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        TftLcd::fill_rect(self, x, y, w, h, color);
    }

    fn draw_fast_hline(&mut self, x: i16, y: i16, length: i16, color: Rgb565) {
        TftLcd::draw_fast_hline(self, x, y, length, color);
    }

    fn draw_fast_vline(&mut self, x: i16, y: i16, length: i16, color: Rgb565) {
        TftLcd::draw_fast_vline(self, x, y, length, color);
    }

    fn fill_screen(&mut self, color: Rgb565) {
        TftLcd::fill_screen(self, color);
    }

    fn set_address_window(&mut self, window: AddressWindow) {
        TftLcd::set_address_window(self, window);
    }

    fn push_colors(&mut self, colors: &[Rgb565], first: bool) {
        TftLcd::push_colors(self, colors, first);
    }

    fn draw_bitmap(&mut self, x: i16, y: i16, w: i16, h: i16, bitmap: &[Rgb565]) {
        TftLcd::draw_bitmap(self, x, y, w, h, bitmap);
    }
}
