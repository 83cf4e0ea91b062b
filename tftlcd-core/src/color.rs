//! RGB 5-6-5 pixel values

/// A 16-bit pixel in 5-6-5 packing (red in the top bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const BLUE: Self = Self(0x001F);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x07FF);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const WHITE: Self = Self(0xFFFF);

    /// Wrap a raw 5-6-5 value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit channels, dropping the low bits of each
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    /// Raw 16-bit value as sent on the bus
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Byte sent first
    #[inline(always)]
    pub const fn hi(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Byte sent second
    #[inline(always)]
    pub const fn lo(self) -> u8 {
        self.0 as u8
    }

    /// Both bus bytes are equal, so the port value can be left in place
    #[inline(always)]
    pub const fn is_byte_symmetric(self) -> bool {
        self.hi() == self.lo()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

/// Pack 8-bit channels into a 5-6-5 pixel
pub const fn color565(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::from_rgb888(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_primaries() {
        assert_eq!(color565(255, 0, 0), Rgb565::RED);
        assert_eq!(color565(0, 255, 0), Rgb565::GREEN);
        assert_eq!(color565(0, 0, 255), Rgb565::BLUE);
        assert_eq!(color565(255, 255, 255), Rgb565::WHITE);
        assert_eq!(color565(0, 0, 0), Rgb565::BLACK);
    }

    #[test]
    fn test_low_bits_dropped() {
        // 0x07 in red and 0x03 in green fall below the channel resolution
        assert_eq!(color565(0x07, 0x03, 0x07), Rgb565::BLACK);
    }

    #[test]
    fn test_bus_bytes() {
        let c = Rgb565::new(0xF81F);
        assert_eq!(c.hi(), 0xF8);
        assert_eq!(c.lo(), 0x1F);
        assert!(!c.is_byte_symmetric());
        assert!(Rgb565::WHITE.is_byte_symmetric());
        assert!(Rgb565::new(0x4242).is_byte_symmetric());
    }
}
