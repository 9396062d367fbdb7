mod reader;

pub use reader::DiskReader;

use orient_core::{ImageFormat, ImageMetadata, Orientation, decode_orientation};
use std::path::Path;

/// Strips a leading `file://` so URLs handed over by callers resolve to paths.
pub fn local_path(path: &str) -> &Path {
    Path::new(path.strip_prefix("file://").unwrap_or(path))
}

/// Reads the display orientation of the JPEG at `path`.
///
/// Reads go through [`DiskReader`]; a file that shrinks mid-decode only
/// shortens them. A file that cannot be opened is treated like one without
/// orientation data and yields [`Orientation::TopLeft`].
pub fn orientation_from_path(path: impl AsRef<Path>) -> Orientation {
    let path = path.as_ref();
    match DiskReader::new(path) {
        Ok(reader) => decode_orientation(reader),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot open image");
            Orientation::default()
        }
    }
}

/// Builds [`ImageMetadata`] for `path` given its declared format name.
///
/// The file is only opened when the format is `"jpeg"`.
pub fn metadata_from_path(path: impl AsRef<Path>, format: &str) -> ImageMetadata {
    metadata_for_format(path.as_ref(), &ImageFormat::from_declared(format))
}

/// Builds [`ImageMetadata`] for `path`, choosing the format from its
/// extension.
pub fn metadata_from_path_by_extension(path: impl AsRef<Path>) -> ImageMetadata {
    let path = path.as_ref();
    metadata_for_format(path, &ImageFormat::from_extension(path))
}

pub fn metadata_for_format(path: &Path, format: &ImageFormat) -> ImageMetadata {
    match format {
        ImageFormat::Jpeg => ImageMetadata::new(orientation_from_path(path)),
        ImageFormat::Other(_) => ImageMetadata::default(),
    }
}
