//! Upward drawing interface
//!
//! A shapes/text library only needs pixel, span and block primitives;
//! everything here takes coordinates in the panel's native orientation.

use crate::color::Rgb565;
use crate::geometry::AddressWindow;

/// Drawing primitives exposed by a panel driver
pub trait GraphicsTarget {
    /// Panel width in pixels
    fn width(&self) -> u16;

    /// Panel height in pixels
    fn height(&self) -> u16;

    /// Set one pixel; off-screen coordinates are ignored
    fn draw_pixel(&mut self, x: i16, y: i16, color: Rgb565);

    /// Fill a rectangle, clipped to the panel
    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565);

    /// Horizontal line of `length` pixels, clipped to the panel
    fn draw_fast_hline(&mut self, x: i16, y: i16, length: i16, color: Rgb565);

    /// Vertical line of `length` pixels, clipped to the panel
    fn draw_fast_vline(&mut self, x: i16, y: i16, length: i16, color: Rgb565);

    /// Fill the whole panel
    fn fill_screen(&mut self, color: Rgb565);

    /// Set the window the next pixel stream lands in
    fn set_address_window(&mut self, window: AddressWindow);

    /// Stream pixels into the current window
    ///
    /// Pass `first = true` on the first chunk of a transfer only; later
    /// chunks continue where the previous one stopped.
    fn push_colors(&mut self, colors: &[Rgb565], first: bool);

    /// Blit a `w` x `h` row-major bitmap with its top-left at (`x`, `y`)
    fn draw_bitmap(&mut self, x: i16, y: i16, w: i16, h: i16, bitmap: &[Rgb565]);
}

/// Helper shapes built from the primitives
pub trait GraphicsTargetExt: GraphicsTarget {
    /// Rectangle outline
    fn draw_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Rgb565) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.draw_fast_hline(x, y, w, color);
        self.draw_fast_hline(x, y.saturating_add(h - 1), w, color);
        self.draw_fast_vline(x, y, h, color);
        self.draw_fast_vline(x.saturating_add(w - 1), y, h, color);
    }
}

// Blanket implementation for all GraphicsTarget types
impl<T: GraphicsTarget + ?Sized> GraphicsTargetExt for T {}
