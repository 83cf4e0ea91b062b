//! Controller identification
//!
//! Detection reduces whatever the panel answers on its ID registers to a
//! 16-bit [`ControllerId`]. [`ControllerKind::from_id`] is the fixed table
//! turning that number into a supported controller family.

use core::fmt;

use crate::geometry::Geometry;

/// Numeric controller discriminator produced by probing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerId(pub u16);

impl ControllerId {
    pub const ILI9325: Self = Self(0x9325);
    pub const ILI9328: Self = Self(0x9328);
    pub const ILI9338: Self = Self(0x9338);
    pub const ILI9341: Self = Self(0x9341);
    pub const HX8347G: Self = Self(0x7575);
    pub const HX8357D: Self = Self(0x8357);
    pub const ST7789: Self = Self(0x7789);

    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Supported controller families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerKind {
    /// ILI9325/ILI9328: 16-bit indexed registers
    Ili932x,
    /// ILI9341 (and the register-compatible ILI9338)
    Ili9341,
    /// HX8347G: 8-bit register pairs
    Hx8347g,
    /// HX8357D: 320x480, needs SETC before it answers
    Hx8357d,
    /// ST7789
    St7789,
}

impl ControllerKind {
    /// Look up the controller family for a probed ID
    ///
    /// Returns `None` for panels this driver cannot talk to.
    pub const fn from_id(id: ControllerId) -> Option<Self> {
        match id.0 {
            0x9325 | 0x9328 => Some(Self::Ili932x),
            0x9341 | 0x9338 => Some(Self::Ili9341),
            0x7575 => Some(Self::Hx8347g),
            0x8357 => Some(Self::Hx8357d),
            0x7789 => Some(Self::St7789),
            _ => None,
        }
    }

    /// Native panel dimensions
    pub const fn geometry(self) -> Geometry {
        match self {
            Self::Hx8357d => Geometry::new(320, 480),
            Self::Ili932x | Self::Ili9341 | Self::Hx8347g | Self::St7789 => Geometry::new(240, 320),
        }
    }

    /// Human-readable family name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ili932x => "ILI932x",
            Self::Ili9341 => "ILI9341",
            Self::Hx8347g => "HX8347G",
            Self::Hx8357d => "HX8357D",
            Self::St7789 => "ST7789",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(ControllerKind::from_id(ControllerId::ST7789), Some(ControllerKind::St7789));
        assert_eq!(ControllerKind::from_id(ControllerId::ILI9341), Some(ControllerKind::Ili9341));
        assert_eq!(ControllerKind::from_id(ControllerId::ILI9338), Some(ControllerKind::Ili9341));
        assert_eq!(ControllerKind::from_id(ControllerId::ILI9325), Some(ControllerKind::Ili932x));
        assert_eq!(ControllerKind::from_id(ControllerId::ILI9328), Some(ControllerKind::Ili932x));
        assert_eq!(ControllerKind::from_id(ControllerId::HX8347G), Some(ControllerKind::Hx8347g));
        assert_eq!(ControllerKind::from_id(ControllerId::HX8357D), Some(ControllerKind::Hx8357d));
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(ControllerKind::from_id(ControllerId(0x0000)), None);
        assert_eq!(ControllerKind::from_id(ControllerId(0xFFFF)), None);
        assert_eq!(ControllerKind::from_id(ControllerId(0x9340)), None);
    }

    #[test]
    fn test_geometry() {
        assert_eq!(ControllerKind::Hx8357d.geometry(), Geometry::new(320, 480));
        assert_eq!(ControllerKind::St7789.geometry(), Geometry::new(240, 320));
    }
}
