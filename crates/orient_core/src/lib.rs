//! Display orientation lookup for JPEG images.
//!
//! The decode path is marker scanner -> APP1 locator -> IFD0 reader ->
//! normalizer. Every stage reports failures as [`CoreError`]; the public
//! entry points fold them into the default [`Orientation::TopLeft`].

mod decode;
mod error;
pub mod exif;
pub mod jpeg;
mod metadata;
pub mod orientation;
mod traits;

pub use decode::{decode_orientation, orientation_from_bytes, read_raw_orientation};
pub use error::{CoreError, FailureKind, Result};
pub use metadata::{ImageFormat, ImageMetadata};
pub use orientation::{DisplayTransform, Orientation, Rotation};
pub use traits::{ByteSource, SliceSource};
