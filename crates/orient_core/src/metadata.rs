use std::path::Path;

use serde::Serialize;

use crate::decode::decode_orientation;
use crate::orientation::Orientation;
use crate::traits::ByteSource;

/// Declared container format of an image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Other(String),
}

impl ImageFormat {
    /// Only the exact name `"jpeg"` selects EXIF decoding.
    pub fn from_declared(name: &str) -> Self {
        if name == "jpeg" {
            Self::Jpeg
        } else {
            Self::Other(name.to_string())
        }
    }

    /// Guesses the format from a `.jpg` / `.jpeg` extension, case-insensitively.
    pub fn from_extension(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
                Self::Jpeg
            }
            Some(ext) => Self::Other(ext.to_ascii_lowercase()),
            None => Self::Other(String::new()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-image metadata consumed by thumbnail and display code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ImageMetadata {
    orientation: Orientation,
}

impl ImageMetadata {
    #[inline]
    pub const fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    /// Builds metadata from an already opened source. Non-JPEG formats are
    /// never parsed and keep the default orientation.
    pub fn from_source<S: ByteSource>(format: &ImageFormat, source: S) -> Self {
        match format {
            ImageFormat::Jpeg => Self::new(decode_orientation(source)),
            ImageFormat::Other(name) => {
                tracing::trace!(format = %name, "skipping orientation lookup");
                Self::default()
            }
        }
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }
}
