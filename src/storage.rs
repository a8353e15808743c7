#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Backing memory of a canvas bitmap.
///
/// Owned storage is released when the canvas is dropped. Borrowed storage stays
/// with the caller; the canvas only ever touches its first `byte_count` bytes.
#[derive(Debug)]
pub enum Storage<'a> {
    #[cfg(feature = "alloc")]
    Owned(Vec<u8>),
    Borrowed(&'a mut [u8]),
}

impl<'a> Storage<'a> {
    /// Allocates `len` zeroed bytes, reporting failure instead of aborting.
    #[cfg(feature = "alloc")]
    pub fn allocate(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed { bytes: len })?;
        data.resize(len, 0);
        Ok(Storage::Owned(data))
    }

    /// Binds to the first `len` bytes of `buffer`.
    pub fn borrow(buffer: &'a mut [u8], len: usize) -> Result<Self> {
        let provided = buffer.len();
        match buffer.get_mut(..len) {
            Some(data) => Ok(Storage::Borrowed(data)),
            None => Err(Error::BufferTooSmall { required: len, provided }),
        }
    }

    pub fn is_owned(&self) -> bool {
        match self {
            #[cfg(feature = "alloc")]
            Storage::Owned(_) => true,
            Storage::Borrowed(_) => false,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        match self {
            #[cfg(feature = "alloc")]
            Storage::Owned(data) => data,
            Storage::Borrowed(data) => data,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            #[cfg(feature = "alloc")]
            Storage::Owned(data) => data,
            Storage::Borrowed(data) => data,
        }
    }
}
