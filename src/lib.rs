//! Monochrome off-screen canvas.
//!
//! Pixels are packed eight to a byte, stacked vertically: byte `(y / 8) * width + x`
//! holds rows `8 * (y / 8) ..= 8 * (y / 8) + 7` of column `x`, with the top row in
//! bit 0. This is the page layout of controllers such as the PCD8544 and SSD1306,
//! so [`MonoFrameBuffer::bitmap`] can be streamed to them unchanged.
//!
//! ```
//! use mono_offscreen::{Drawable, MonoFrameBuffer, PenColor};
//!
//! let mut storage = [0u8; 84 * 48 / 8];
//! let mut canvas = MonoFrameBuffer::with_buffer(84, 48, &mut storage)?;
//! canvas.begin_frame()?;
//! canvas.fill_rect(0, 0, 84, 8)?;
//! canvas.set_pen_color(PenColor::Background);
//! canvas.draw_pixel(10, 3)?;
//! canvas.end_frame()?;
//! assert_eq!(canvas.bitmap()[10], 0b1111_0111);
//! # Ok::<(), mono_offscreen::Error>(())
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod fmt;

mod canvas;
mod error;
mod framebuffer;
mod geometry;
mod graphics;
mod storage;

pub use canvas::{Drawable, PenColor};
pub use error::{Error, Result};
pub use framebuffer::{FrameState, MonoFrameBuffer};
pub use geometry::{Geometry, BAND_HEIGHT};
pub use storage::Storage;
