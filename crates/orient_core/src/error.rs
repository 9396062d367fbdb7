use thiserror::Error;

/// Coarse classification of why a decode gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// JPEG framing is broken or the source ended early.
    Structural,
    /// The stream is framed correctly but carries no APP1 segment.
    Container,
    /// The APP1 payload is not a usable TIFF structure.
    Tiff,
    /// The TIFF structure is fine but holds no usable orientation.
    Semantic,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Structural => "structural",
            Self::Container => "container",
            Self::Tiff => "tiff",
            Self::Semantic => "semantic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing JPEG SOI marker")]
    MissingSoi,

    #[error("No marker at offset {offset}")]
    NotAMarker { offset: u64 },

    #[error("Unexpected end of data at offset {offset} (needed {needed} bytes)")]
    UnexpectedEof { offset: u64, needed: u64 },

    #[error("Invalid segment length {length} at offset {offset}")]
    InvalidSegmentLength { offset: u64, length: u16 },

    #[error("No APP1 segment before end of image")]
    NoExifSegment,

    #[error("EXIF payload too short: {len} bytes")]
    ExifTooShort { len: usize },

    #[error("Invalid TIFF header magic")]
    BadTiffMagic,

    #[error("IFD0 offset {offset} points inside the TIFF header")]
    BackwardsIfdOffset { offset: u32 },

    #[error("IFD0 at {position} with {entries} entries exceeds payload of {len} bytes")]
    TruncatedDirectory {
        position: usize,
        entries: u16,
        len: usize,
    },

    #[error("Orientation tag not present in IFD0")]
    OrientationMissing,

    #[error("Orientation value {0} outside 1..=8")]
    OrientationOutOfRange(u16),
}

impl CoreError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Io(_)
            | Self::MissingSoi
            | Self::NotAMarker { .. }
            | Self::UnexpectedEof { .. }
            | Self::InvalidSegmentLength { .. } => FailureKind::Structural,
            Self::NoExifSegment => FailureKind::Container,
            Self::ExifTooShort { .. }
            | Self::BadTiffMagic
            | Self::BackwardsIfdOffset { .. }
            | Self::TruncatedDirectory { .. } => FailureKind::Tiff,
            Self::OrientationMissing | Self::OrientationOutOfRange(_) => FailureKind::Semantic,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
