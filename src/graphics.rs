//! `embedded-graphics` support.
//!
//! Lines, circles, text and images come from the `embedded-graphics` crate and
//! are rendered here through [`DrawTarget`]. Pixels that fall outside the canvas
//! are clipped. All drawing needs an active frame.

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Pixel,
};

use crate::canvas::PenColor;
use crate::error::Error;
use crate::framebuffer::MonoFrameBuffer;

impl OriginDimensions for MonoFrameBuffer<'_> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl DrawTarget for MonoFrameBuffer<'_> {
    type Color = BinaryColor;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.ensure_active()?;
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            if self.geometry().contains(x, y) {
                self.write_pixel(x, y, color.into())?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.ensure_active()?;
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        // Both corners are inside the canvas after clipping.
        self.write_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            (bottom_right.x - area.top_left.x + 1) as u16,
            (bottom_right.y - area.top_left.y + 1) as u16,
            color.into(),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        MonoFrameBuffer::clear(self, PenColor::from(color))
    }
}
