use crate::error::Result;
use crate::exif::{locate_exif, read_orientation_tag};
use crate::orientation::Orientation;
use crate::traits::{ByteSource, SliceSource};

/// Runs the locate and IFD0 stages, keeping the reason for any failure.
///
/// The value is the raw tag contents and has not been range checked.
pub fn read_raw_orientation<S: ByteSource>(source: S) -> Result<u16> {
    let blob = locate_exif(source)?;
    read_orientation_tag(&blob)
}

/// Decodes the display orientation of a JPEG held in `source`.
///
/// Never fails: a missing, malformed or out-of-range orientation resolves
/// to [`Orientation::TopLeft`].
pub fn decode_orientation<S: ByteSource>(source: S) -> Orientation {
    let raw = match read_raw_orientation(source) {
        Ok(raw) => Some(raw),
        Err(e) => {
            tracing::debug!(kind = %e.kind(), error = %e, "no usable EXIF orientation");
            None
        }
    };

    if let Some(value) = raw.filter(|v| Orientation::from_exif(*v).is_none()) {
        tracing::debug!(value, "EXIF orientation out of range");
    }

    Orientation::normalize(raw)
}

/// Convenience wrapper for in-memory images.
pub fn orientation_from_bytes(data: &[u8]) -> Orientation {
    decode_orientation(SliceSource::new(data))
}
