//! embedded-graphics integration
//!
//! Lets the driver sit under `embedded-graphics` text, shapes and images.
//! Solid and contiguous fills that land fully on the panel take the
//! window + stream path; everything else degrades to clipped pixels.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565 as EgRgb565};
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;
use embedded_hal::delay::DelayNs;
use tftlcd_core::{AddressWindow, Rgb565};
use tftlcd_hal::ParallelBus;

use crate::driver::TftLcd;

fn native(color: EgRgb565) -> Rgb565 {
    Rgb565::new(color.into_storage())
}

impl<B, D> OriginDimensions for TftLcd<B, D> {
    fn size(&self) -> Size {
        Size::new(self.geometry.width as u32, self.geometry.height as u32)
    }
}

impl<B, D> DrawTarget for TftLcd<B, D>
where
    B: ParallelBus,
    D: DelayNs,
{
    type Color = EgRgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (i16::try_from(point.x), i16::try_from(point.y)) {
                self.draw_pixel(x, y, native(color));
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.is_zero_sized() {
            return Ok(());
        }
        if drawable == *area {
            let window = to_window(area);
            self.set_address_window(window);
            self.push_iter(colors.into_iter().map(native), true);
            return Ok(());
        }

        self.draw_iter(
            area.points()
                .zip(colors)
                .filter(|(point, _)| drawable.contains(*point))
                .map(|(point, color)| Pixel(point, color)),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.is_zero_sized() {
            return Ok(());
        }
        let window = to_window(&drawable);
        self.set_address_window(window);
        self.flood(native(color), window.area());
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(native(color));
        Ok(())
    }
}

/// Window for a non-empty rectangle already inside the panel
fn to_window(area: &Rectangle) -> AddressWindow {
    let x1 = area.top_left.x as u16;
    let y1 = area.top_left.y as u16;
    AddressWindow::new(
        x1,
        y1,
        x1 + (area.size.width - 1) as u16,
        y1 + (area.size.height - 1) as u16,
    )
}
