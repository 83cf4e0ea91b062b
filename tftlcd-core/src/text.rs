//! Text cursor state
//!
//! Glyph rendering belongs to the graphics layer; the driver only keeps
//! the state that layer reads back between calls.

use crate::color::Rgb565;

/// Cursor position and text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextState {
    pub cursor_x: i16,
    pub cursor_y: i16,
    pub color: Rgb565,
    /// Equal to `color` means transparent background
    pub background: Rgb565,
    /// Integer glyph scale, at least 1
    pub size: u8,
    pub wrap: bool,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            color: Rgb565::WHITE,
            background: Rgb565::WHITE,
            size: 1,
            wrap: true,
        }
    }
}

impl TextState {
    pub fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Set foreground only; background becomes transparent
    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
        self.background = color;
    }

    pub fn set_colors(&mut self, color: Rgb565, background: Rgb565) {
        self.color = color;
        self.background = background;
    }

    pub fn set_size(&mut self, size: u8) {
        self.size = size.max(1);
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Whether glyph backgrounds should be left untouched
    pub fn is_transparent(&self) -> bool {
        self.color == self.background
    }
}
