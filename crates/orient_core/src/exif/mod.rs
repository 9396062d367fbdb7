//! EXIF payload location and IFD0 decoding.

mod locator;
mod tiff;

pub use locator::locate_exif;
pub use tiff::{ByteOrder, IfdEntry, TiffHeader, read_orientation_tag};

/// Identifier that opens an EXIF APP1 payload.
pub const EXIF_IDENTIFIER: &[u8; 6] = b"Exif\x00\x00";
pub const EXIF_IDENTIFIER_LEN: usize = EXIF_IDENTIFIER.len();

pub const TIFF_HEADER_LEN: usize = 8;
pub const IFD_ENTRY_LEN: usize = 12;

pub const TAG_ORIENTATION: u16 = 0x0112;
pub const TYPE_SHORT: u16 = 3;

/// Raw payload of the first APP1 segment, identifier included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifBlob {
    data: Vec<u8>,
}

impl ExifBlob {
    #[inline]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
