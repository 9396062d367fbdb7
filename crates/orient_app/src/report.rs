use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use orient_core::{DisplayTransform, ImageFormat, ImageMetadata, Orientation};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub path: String,
    pub format: &'a str,
    pub orientation: Orientation,
    pub code: u16,
    pub rotation: u16,
    pub mirrored: bool,
}

impl<'a> Report<'a> {
    pub fn new(path: &Path, format: &'a ImageFormat, meta: ImageMetadata) -> Self {
        let orientation = meta.orientation();
        let DisplayTransform { rotation, mirror } = orientation.display_transform();
        Self {
            path: path.display().to_string(),
            format: format.name(),
            orientation,
            code: orientation.exif_code(),
            rotation: rotation.degrees(),
            mirrored: mirror,
        }
    }

    pub fn write_tsv(&self, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            self.path,
            self.code,
            self.orientation,
            self.orientation.display_transform()
        )
        .context("Failed to write report line")
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer(&mut *out, self).context("Failed to serialize report")?;
        writeln!(out).context("Failed to write report line")
    }
}
