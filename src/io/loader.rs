//! Input decoding and channel normalization.
use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{Error, Result};

/// Decode a file into an 8-bit RGBA raster.
///
/// Grayscale, gray+alpha, and 3-channel inputs are normalized to four
/// channels. Any pre-existing alpha is read here but overwritten later by
/// the compositor. Other decoded layouts (e.g. 16-bit) are rejected with
/// [`Error::UnsupportedLayout`]; undecodable files surface as
/// [`Error::Decode`]. Both are caught per file by the batch loop.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?;
    match image {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgba8(_) => Ok(image.to_rgba8()),
        other => Err(Error::UnsupportedLayout {
            color: format!("{:?}", other.color()),
        }),
    }
}
