//! Panel geometry, address windows and clipping
//!
//! Coordinates coming from the graphics layer are signed (shapes may start
//! off-screen). Everything that reaches the bus is an [`AddressWindow`]
//! that lies inside the panel. Clipping uses inclusive bounds and `i32`
//! intermediates so `x + w` never overflows.

/// Fixed panel dimensions in native orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

/// Inclusive rectangle in panel pixel space
///
/// Pixel writes following the window auto-increment across it in scan
/// order. The window is not retained by the driver; it must be set right
/// before each transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
}

impl AddressWindow {
    /// Create a window from two inclusive corners
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// A single pixel
    pub const fn pixel(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    /// Width in pixels (zero for an inverted window)
    pub fn width(&self) -> u32 {
        if self.x2 < self.x1 {
            0
        } else {
            (self.x2 - self.x1) as u32 + 1
        }
    }

    /// Height in pixels (zero for an inverted window)
    pub fn height(&self) -> u32 {
        if self.y2 < self.y1 {
            0
        } else {
            (self.y2 - self.y1) as u32 + 1
        }
    }

    /// Number of pixels covered
    pub fn area(&self) -> u32 {
        self.width() * self.height()
    }
}

impl Geometry {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Total pixel count
    pub fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Window covering the whole panel
    pub fn full_window(&self) -> AddressWindow {
        AddressWindow::new(0, 0, self.width - 1, self.height - 1)
    }

    /// Whether a window is well-formed and lies on the panel
    pub fn fits(&self, window: &AddressWindow) -> bool {
        window.x1 <= window.x2
            && window.y1 <= window.y2
            && window.x2 < self.width
            && window.y2 < self.height
    }

    /// Whether a single pixel is on the panel
    pub fn contains(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && (x as i32) < self.width as i32 && (y as i32) < self.height as i32
    }

    /// Whether a `w` x `h` block at (`x`, `y`) is entirely on the panel
    pub fn contains_rect(&self, x: i16, y: i16, w: i16, h: i16) -> bool {
        w > 0
            && h > 0
            && x >= 0
            && y >= 0
            && x as i32 + w as i32 <= self.width as i32
            && y as i32 + h as i32 <= self.height as i32
    }

    /// Clip a horizontal line starting at (`x`, `y`)
    ///
    /// Returns `None` when nothing of the line is visible.
    pub fn clip_hline(&self, x: i16, y: i16, length: i16) -> Option<AddressWindow> {
        let (x1, x2) = clip_span(x as i32, length as i32, self.width as i32)?;
        let y = clip_point(y as i32, self.height as i32)?;
        Some(AddressWindow::new(x1, y, x2, y))
    }

    /// Clip a vertical line starting at (`x`, `y`)
    pub fn clip_vline(&self, x: i16, y: i16, length: i16) -> Option<AddressWindow> {
        let x = clip_point(x as i32, self.width as i32)?;
        let (y1, y2) = clip_span(y as i32, length as i32, self.height as i32)?;
        Some(AddressWindow::new(x, y1, x, y2))
    }

    /// Clip a `w` x `h` rectangle with top-left corner at (`x`, `y`)
    pub fn clip_rect(&self, x: i16, y: i16, w: i16, h: i16) -> Option<AddressWindow> {
        let (x1, x2) = clip_span(x as i32, w as i32, self.width as i32)?;
        let (y1, y2) = clip_span(y as i32, h as i32, self.height as i32)?;
        Some(AddressWindow::new(x1, y1, x2, y2))
    }
}

/// Clip `[start, start + length)` to `[0, limit)`, returning inclusive ends
fn clip_span(start: i32, length: i32, limit: i32) -> Option<(u16, u16)> {
    if length <= 0 || start >= limit {
        return None;
    }
    let end = start + length - 1;
    if end < 0 {
        return None;
    }
    let start = start.max(0);
    let end = end.min(limit - 1);
    Some((start as u16, end as u16))
}

fn clip_point(v: i32, limit: i32) -> Option<u16> {
    if v < 0 || v >= limit {
        None
    } else {
        Some(v as u16)
    }
}
