use core::fmt;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by the off-screen canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// Zero-sized canvas, or a height that does not fill whole 8-row bands.
    InvalidGeometry { width: u16, height: u16 },
    /// The bitmap could not be allocated.
    AllocationFailed { bytes: usize },
    /// Caller-supplied storage is shorter than the bitmap.
    BufferTooSmall { required: usize, provided: usize },
    /// Coordinate outside the canvas.
    OutOfBounds { x: u16, y: u16 },
    /// Drawing outside a `begin`/`end` session.
    NotActive,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGeometry { width, height } => {
                write!(f, "invalid canvas geometry {width}x{height}")
            }
            Error::AllocationFailed { bytes } => {
                write!(f, "failed to allocate {bytes} byte bitmap")
            }
            Error::BufferTooSmall { required, provided } => {
                write!(f, "buffer holds {provided} bytes, bitmap needs {required}")
            }
            Error::OutOfBounds { x, y } => write!(f, "pixel ({x}, {y}) is outside the canvas"),
            Error::NotActive => f.write_str("canvas is not between begin and end"),
        }
    }
}

impl core::error::Error for Error {}
