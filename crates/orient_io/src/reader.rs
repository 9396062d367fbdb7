//! Positional reader over a regular image file.

use orient_core::{ByteSource, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// A read-only [`ByteSource`] backed by an open file.
///
/// The file is opened read-only and closed when the reader is dropped, so
/// every exit path of a decode releases it.
///
/// # Example
///
/// ```ignore
/// use orient_io::DiskReader;
/// use orient_core::decode_orientation;
///
/// let reader = DiskReader::new("photo.jpg")?;
/// let orientation = decode_orientation(reader);
/// ```
pub struct DiskReader {
    file: File,
    size: u64,
}

impl DiskReader {
    /// Opens `path` for reading and records its size.
    ///
    /// Fails if the file does not exist, cannot be read, or its size cannot
    /// be determined.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;

        #[cfg(target_os = "linux")]
        {
            use rustix::fs::{Advice, fadvise};

            let _ = fadvise(&file, 0, None, Advice::Sequential);
        }

        let size = file.seek(SeekFrom::End(0))?;
        file.seek(SeekFrom::Start(0))?;

        Ok(Self { file, size })
    }
}

impl ByteSource for DiskReader {
    fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
        if offset >= self.size {
            return Ok(0);
        }
        self.file.seek(SeekFrom::Start(offset))?;

        let mut filled = 0;
        while filled < buffer.len() {
            match self.file.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(filled)
    }

    fn size(&self) -> u64 {
        self.size
    }
}
