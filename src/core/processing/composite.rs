//! Alpha compositing: write a binary mask into the raster's alpha channel.
use image::{GrayImage, RgbaImage};

/// Return a copy of the raster with alpha set to 255 where the mask is
/// foreground and 0 elsewhere. Alpha is strictly binary; no feathering.
/// Neither input is mutated.
pub fn apply_mask(rgba: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    debug_assert_eq!(rgba.dimensions(), mask.dimensions());
    let mut result = rgba.clone();
    for (px, m) in result.pixels_mut().zip(mask.pixels()) {
        px.0[3] = if m.0[0] > 0 { 255 } else { 0 };
    }
    result
}
