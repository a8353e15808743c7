use crate::error::{Error, Result};

/// Rows packed into one bitmap byte.
pub const BAND_HEIGHT: u16 = 8;

/// Validated canvas dimensions.
///
/// The height must be a whole number of bands; together with a non-zero width
/// this guarantees `width * height` is a multiple of eight and that every
/// in-range pixel addresses a byte inside the bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    width: u16,
    height: u16,
}

impl Geometry {
    pub const fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 || height % BAND_HEIGHT != 0 {
            return Err(Error::InvalidGeometry { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-row bands.
    pub const fn bands(&self) -> usize {
        (self.height / BAND_HEIGHT) as usize
    }

    /// Bitmap size in bytes, `width * height / 8`.
    pub const fn byte_count(&self) -> usize {
        self.width as usize * self.height as usize / 8
    }

    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Checks that `[x, x + width) x [y, y + height)` lies inside the canvas.
    /// A rejected rectangle reports its far corner. Empty rectangles always fit.
    pub fn check_rect(&self, x: u16, y: u16, width: u16, height: u16) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        let x_end = u32::from(x) + u32::from(width);
        let y_end = u32::from(y) + u32::from(height);
        if x_end > u32::from(self.width) || y_end > u32::from(self.height) {
            return Err(Error::OutOfBounds {
                x: (x_end - 1).min(u32::from(u16::MAX)) as u16,
                y: (y_end - 1).min(u32::from(u16::MAX)) as u16,
            });
        }
        Ok(())
    }

    /// Byte index and bit position of pixel `(x, y)`.
    pub const fn byte_index_for(&self, x: u16, y: u16) -> Result<(usize, u8)> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }
        let index = (y / BAND_HEIGHT) as usize * self.width as usize + x as usize;
        Ok((index, (y % BAND_HEIGHT) as u8))
    }
}
