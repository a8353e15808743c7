use crate::canvas::{Drawable, PenColor};
use crate::error::{Error, Result};
use crate::geometry::{Geometry, BAND_HEIGHT};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameState {
    Idle,
    Active,
}

/// Off-screen 1-bit canvas packed in vertical 8-pixel bands.
///
/// Drawing is only accepted between [`Drawable::begin_frame`] and
/// [`Drawable::end_frame`]; `begin_frame` clears the bitmap.
#[derive(Debug)]
pub struct MonoFrameBuffer<'a> {
    geometry: Geometry,
    storage: Storage<'a>,
    pen: PenColor,
    state: FrameState,
}

#[cfg(feature = "alloc")]
impl MonoFrameBuffer<'static> {
    /// Allocates a bitmap for a `width` x `height` canvas.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::from_geometry(Geometry::new(width, height)?)
    }

    pub fn from_geometry(geometry: Geometry) -> Result<Self> {
        let storage = Storage::allocate(geometry.byte_count())?;
        trace!("allocated {=usize} byte bitmap", geometry.byte_count());
        Ok(Self::with_storage(geometry, storage))
    }
}

impl<'a> MonoFrameBuffer<'a> {
    /// Draws into caller storage, which must hold at least `width * height / 8`
    /// bytes. The storage is never freed by the canvas.
    pub fn with_buffer(width: u16, height: u16, buffer: &'a mut [u8]) -> Result<Self> {
        Self::with_geometry_and_buffer(Geometry::new(width, height)?, buffer)
    }

    pub fn with_geometry_and_buffer(geometry: Geometry, buffer: &'a mut [u8]) -> Result<Self> {
        let storage = Storage::borrow(buffer, geometry.byte_count())?;
        trace!("bound {=usize} byte bitmap", geometry.byte_count());
        Ok(Self::with_storage(geometry, storage))
    }

    fn with_storage(geometry: Geometry, storage: Storage<'a>) -> Self {
        Self {
            geometry,
            storage,
            pen: PenColor::default(),
            state: FrameState::Idle,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn width(&self) -> u16 {
        self.geometry.width()
    }

    pub fn height(&self) -> u16 {
        self.geometry.height()
    }

    pub fn byte_count(&self) -> usize {
        self.geometry.byte_count()
    }

    pub fn is_owned(&self) -> bool {
        self.storage.is_owned()
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == FrameState::Active
    }

    /// The packed bitmap, in the order a page-addressed controller expects it.
    pub fn bitmap(&self) -> &[u8] {
        self.storage.as_slice()
    }

    /// One byte per column of the 8-row band `index`.
    pub fn band(&self, index: usize) -> Option<&[u8]> {
        self.bitmap().chunks_exact(self.width() as usize).nth(index)
    }

    pub fn bands(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.bitmap().chunks_exact(self.width() as usize)
    }

    /// Byte index and bit position of `(x, y)`.
    pub fn byte_index_for(&self, x: u16, y: u16) -> Result<(usize, u8)> {
        self.geometry.byte_index_for(x, y)
    }

    /// Colour of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u16, y: u16) -> Result<PenColor> {
        let (index, bit) = self.byte_index_for(x, y)?;
        Ok(if self.bitmap()[index] & (1 << bit) != 0 {
            PenColor::Foreground
        } else {
            PenColor::Background
        })
    }

    /// Fills the whole canvas with `color`.
    pub fn clear(&mut self, color: PenColor) -> Result<()> {
        self.ensure_active()?;
        self.storage.as_mut_slice().fill(color.fill_byte());
        Ok(())
    }

    pub(crate) fn ensure_active(&self) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            warn!("drawing outside a frame");
            Err(Error::NotActive)
        }
    }

    pub(crate) fn write_pixel(&mut self, x: u16, y: u16, color: PenColor) -> Result<()> {
        let (index, bit) = self.byte_index_for(x, y)?;
        let byte = &mut self.storage.as_mut_slice()[index];
        match color {
            PenColor::Foreground => *byte |= 1 << bit,
            PenColor::Background => *byte &= !(1 << bit),
        }
        Ok(())
    }

    /// Writes `color` over a rectangle with one masked store per column and band.
    pub(crate) fn write_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: PenColor,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        if let Err(err) = self.geometry.check_rect(x, y, width, height) {
            warn!("rectangle leaves the canvas at ({=u16}, {=u16})", x, y);
            return Err(err);
        }
        let x_end = u32::from(x) + u32::from(width);
        let y_end = u32::from(y) + u32::from(height);

        let stride = self.width() as usize;
        let columns = x as usize..x_end as usize;
        let bitmap = self.storage.as_mut_slice();
        let mut row = u32::from(y);
        while row < y_end {
            let band = (row / u32::from(BAND_HEIGHT)) as usize;
            let first = row % u32::from(BAND_HEIGHT);
            let last = (y_end - band as u32 * u32::from(BAND_HEIGHT)).min(u32::from(BAND_HEIGHT));
            let mask = band_mask(first, last);
            let start = band * stride;
            for byte in &mut bitmap[start + columns.start..start + columns.end] {
                match color {
                    PenColor::Foreground => *byte |= mask,
                    PenColor::Background => *byte &= !mask,
                }
            }
            row = (band as u32 + 1) * u32::from(BAND_HEIGHT);
        }
        Ok(())
    }
}

/// Bits `first..last` of a band byte.
fn band_mask(first: u32, last: u32) -> u8 {
    ((0xFFu16 << first) & (0xFFu16 >> (8 - last))) as u8
}

impl Drawable for MonoFrameBuffer<'_> {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn pen_color(&self) -> PenColor {
        self.pen
    }

    fn set_pen_color(&mut self, color: PenColor) {
        self.pen = color;
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.storage.as_mut_slice().fill(0);
        self.state = FrameState::Active;
        debug!("frame started");
        Ok(())
    }

    fn draw_pixel(&mut self, x: u16, y: u16) -> Result<()> {
        self.ensure_active()?;
        self.write_pixel(x, y, self.pen)
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<()> {
        self.ensure_active()?;
        self.write_rect(x, y, width, height, self.pen)
    }

    fn end_frame(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.state = FrameState::Idle;
        debug!("frame ended");
        Ok(())
    }
}
