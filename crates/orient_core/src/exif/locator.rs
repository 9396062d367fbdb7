use super::ExifBlob;
use crate::error::{CoreError, Result};
use crate::jpeg::{LENGTH_FIELD_LEN, MarkerScanner, MarkerType};
use crate::traits::ByteSource;

/// Walks the JPEG segment chain and returns the payload of the first APP1.
///
/// The payload is returned as-is; checking the `Exif\0\0` identifier is left
/// to the TIFF decoder.
pub fn locate_exif<S: ByteSource>(source: S) -> Result<ExifBlob> {
    let mut scanner = MarkerScanner::new(source);
    scanner.expect_soi()?;

    loop {
        let marker = MarkerType::from_byte(scanner.next_marker()?);

        if matches!(marker, MarkerType::Soi | MarkerType::Eoi) {
            return Err(CoreError::NoExifSegment);
        }
        if !marker.has_payload() {
            continue;
        }

        let length = scanner.read_length()?;
        let payload_len = length - LENGTH_FIELD_LEN;

        if marker == MarkerType::App(1) {
            let data = scanner.read_payload(payload_len as usize)?;
            tracing::trace!(len = data.len(), "found APP1 segment");
            return Ok(ExifBlob::new(data));
        }

        scanner.skip(u64::from(payload_len))?;
    }
}
