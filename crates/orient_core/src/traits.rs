//! The byte source abstraction the decoder reads through.
//!
//! Decoding only needs positional reads and the total length, so files,
//! memory maps and in-memory buffers all plug in behind the same trait.

use crate::error::Result;

/// A random-access, sized source of raw image bytes.
///
/// # Example
///
/// ```ignore
/// struct ImageFile { /* ... */ }
///
/// impl ByteSource for ImageFile {
///     fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
///         // Read from the file at offset
///     }
///
///     fn size(&self) -> u64 {
///         // Return total size in bytes
///     }
/// }
/// ```
pub trait ByteSource {
    /// Reads up to `buffer.len()` bytes starting at `offset`.
    ///
    /// Returns the number of bytes read, which is less than `buffer.len()`
    /// only when the end of the source is reached.
    fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize>;

    /// Returns the total size of the source in bytes.
    fn size(&self) -> u64;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
        (**self).read_chunk(offset, buffer)
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
        (**self).read_chunk(offset, buffer)
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}

/// A [`ByteSource`] over borrowed bytes.
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a> {
    data: &'a [u8],
}

impl<'a> SliceSource<'a> {
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
        let Ok(start) = usize::try_from(offset) else {
            return Ok(0);
        };
        if start >= self.data.len() {
            return Ok(0);
        }
        let end = start.saturating_add(buffer.len()).min(self.data.len());
        let len = end - start;
        buffer[..len].copy_from_slice(&self.data[start..end]);
        Ok(len)
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_source_reads() {
        let data = [1u8, 2, 3, 4, 5];
        let mut source = SliceSource::new(&data);
        let mut buf = [0u8; 3];

        assert_eq!(source.read_chunk(1, &mut buf).unwrap(), 3);
        assert_eq!(buf, [2, 3, 4]);

        assert_eq!(source.read_chunk(3, &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &[4, 5]);

        assert_eq!(source.read_chunk(5, &mut buf).unwrap(), 0);
        assert_eq!(source.read_chunk(u64::MAX, &mut buf).unwrap(), 0);
        assert_eq!(source.size(), 5);
    }

    #[test]
    fn test_boxed_source_delegates() {
        let data = [9u8, 8, 7];
        let mut source: Box<dyn ByteSource + '_> = Box::new(SliceSource::new(&data));
        let mut buf = [0u8; 1];
        assert_eq!(source.read_chunk(2, &mut buf).unwrap(), 1);
        assert_eq!(buf[0], 7);
        assert_eq!(source.size(), 3);
    }
}
