use embedded_graphics_core::pixelcolor::BinaryColor;

use crate::error::Result;
use crate::geometry::Geometry;

/// Pen colour of a monochrome canvas.
///
/// Canvas colours are raw 16-bit values where `0x0000` is the default black ink
/// and anything else is paper. Ink sets the pixel bit, paper clears it, so a
/// zeroed bitmap is a blank page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PenColor {
    #[default]
    Foreground,
    Background,
}

impl PenColor {
    pub const fn from_raw(raw: u16) -> Self {
        if raw == 0 {
            PenColor::Foreground
        } else {
            PenColor::Background
        }
    }

    pub const fn to_raw(self) -> u16 {
        match self {
            PenColor::Foreground => 0x0000,
            PenColor::Background => 0xFFFF,
        }
    }

    pub const fn invert(self) -> Self {
        match self {
            PenColor::Foreground => PenColor::Background,
            PenColor::Background => PenColor::Foreground,
        }
    }

    /// Value of a bitmap byte whose eight pixels all have this colour.
    pub(crate) const fn fill_byte(self) -> u8 {
        match self {
            PenColor::Foreground => 0xFF,
            PenColor::Background => 0x00,
        }
    }
}

impl From<BinaryColor> for PenColor {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => PenColor::Foreground,
            BinaryColor::Off => PenColor::Background,
        }
    }
}

impl From<PenColor> for BinaryColor {
    fn from(color: PenColor) -> Self {
        match color {
            PenColor::Foreground => BinaryColor::On,
            PenColor::Background => BinaryColor::Off,
        }
    }
}

/// A surface that is drawn in frames with the current pen colour.
pub trait Drawable {
    fn geometry(&self) -> Geometry;

    fn pen_color(&self) -> PenColor;

    fn set_pen_color(&mut self, color: PenColor);

    /// Starts a frame. Implementations clear their surface here.
    fn begin_frame(&mut self) -> Result<()>;

    fn draw_pixel(&mut self, x: u16, y: u16) -> Result<()>;

    /// Fills `[x, x + width) x [y, y + height)` with the pen colour.
    ///
    /// The default plots every pixel; surfaces with a packed layout should
    /// override it. A rectangle that leaves the surface is rejected before
    /// anything is drawn.
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<()> {
        self.geometry().check_rect(x, y, width, height)?;
        for row in y..y + height {
            for column in x..x + width {
                self.draw_pixel(column, row)?;
            }
        }
        Ok(())
    }

    /// Ends the frame, leaving the surface ready to be transferred.
    fn end_frame(&mut self) -> Result<()>;
}
