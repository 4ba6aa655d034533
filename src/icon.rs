use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba};

use crate::recolor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecolorOutcome {
    Saved { output: PathBuf, replaced: u64 },
    MissingInput { input: PathBuf },
}

/// Loads an icon from disk, replaces near-white pixels with `bg_color`, and writes it as PNG.
///
/// A missing input is reported through [`RecolorOutcome::MissingInput`] and leaves the
/// filesystem untouched. Decode and write failures are returned as errors.
pub fn recolor_icon(input: &Path, output: &Path, bg_color: Rgba<u8>) -> Result<RecolorOutcome> {
    if !input.exists() {
        return Ok(RecolorOutcome::MissingInput {
            input: input.to_path_buf(),
        });
    }

    let img =
        image::open(input).with_context(|| format!("Failed to open icon: {}", input.display()))?;

    let (img, replaced) = recolor::recolor_image(img, bg_color);

    img.save_with_format(output, ImageFormat::Png)
        .with_context(|| format!("Failed to write icon: {}", output.display()))?;

    Ok(RecolorOutcome::Saved {
        output: output.to_path_buf(),
        replaced,
    })
}
