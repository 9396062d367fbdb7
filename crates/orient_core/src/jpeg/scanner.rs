use super::{FILL, LENGTH_FIELD_LEN, SOI};
use crate::error::{CoreError, Result};
use crate::traits::ByteSource;

/// Sequential marker reader over a [`ByteSource`].
///
/// Markers follow CCITT T.81 Annex B: an 0xFF byte, any number of 0xFF fill
/// bytes, then a code that is neither 0x00 nor 0xFF. The scanner keeps its
/// own cursor and never reads past [`ByteSource::size`].
pub struct MarkerScanner<S> {
    source: S,
    position: u64,
}

impl<S: ByteSource> MarkerScanner<S> {
    #[inline]
    pub fn new(source: S) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        if self.source.read_chunk(self.position, &mut byte)? != 1 {
            return Err(CoreError::UnexpectedEof {
                offset: self.position,
                needed: 1,
            });
        }
        self.position += 1;
        Ok(byte[0])
    }

    /// Rewinds to the start of the source and requires an SOI marker there.
    pub fn expect_soi(&mut self) -> Result<()> {
        self.position = 0;
        match self.next_marker() {
            Ok(SOI) => Ok(()),
            Ok(_) | Err(CoreError::NotAMarker { .. } | CoreError::UnexpectedEof { .. }) => {
                Err(CoreError::MissingSoi)
            }
            Err(e) => Err(e),
        }
    }

    /// Reads the next marker code at the cursor.
    ///
    /// The cursor must sit on an 0xFF byte; no resynchronisation over
    /// entropy-coded data is attempted.
    pub fn next_marker(&mut self) -> Result<u8> {
        let start = self.position;

        if self.read_byte()? != FILL {
            return Err(CoreError::NotAMarker { offset: start });
        }

        let mut code = self.read_byte()?;
        while code == FILL {
            code = self.read_byte()?;
        }

        // 0xFF00 is a stuffed data byte, not a marker.
        if code == 0x00 {
            return Err(CoreError::NotAMarker { offset: start });
        }

        tracing::trace!(offset = start, marker = code, "jpeg marker");
        Ok(code)
    }

    /// Reads a big-endian segment length and checks it covers its own field.
    pub fn read_length(&mut self) -> Result<u16> {
        let offset = self.position;
        let mut buf = [0u8; 2];
        if self.source.read_chunk(offset, &mut buf)? != buf.len() {
            return Err(CoreError::UnexpectedEof { offset, needed: 2 });
        }
        self.position += 2;

        let length = u16::from_be_bytes(buf);
        if length < LENGTH_FIELD_LEN {
            return Err(CoreError::InvalidSegmentLength { offset, length });
        }
        Ok(length)
    }

    /// Advances the cursor by `count` bytes without reading them.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        let target = self.position.saturating_add(count);
        if target > self.source.size() {
            return Err(CoreError::UnexpectedEof {
                offset: self.position,
                needed: count,
            });
        }
        self.position = target;
        Ok(())
    }

    /// Reads exactly `len` bytes at the cursor into an owned buffer.
    pub fn read_payload(&mut self, len: usize) -> Result<Vec<u8>> {
        let available = self.source.size().saturating_sub(self.position);
        if (len as u64) > available {
            return Err(CoreError::UnexpectedEof {
                offset: self.position,
                needed: len as u64,
            });
        }

        let mut payload = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            let read = self
                .source
                .read_chunk(self.position + filled as u64, &mut payload[filled..])?;
            if read == 0 {
                return Err(CoreError::UnexpectedEof {
                    offset: self.position,
                    needed: len as u64,
                });
            }
            filled += read;
        }
        self.position += len as u64;
        Ok(payload)
    }
}
