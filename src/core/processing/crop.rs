//! Subject cropping: tight bounding box over the mask, padded and clamped.
use image::{GrayImage, RgbaImage, imageops};

/// Crop the raster to the padded bounding box of the mask's foreground.
///
/// The cropped alpha is re-binarized from the cropped mask, so edge pixels
/// altered by clamping stay consistent. If the mask has no foreground at
/// all, the raster is returned unchanged.
pub fn crop_to_mask(rgba: &RgbaImage, mask: &GrayImage, padding: u32) -> RgbaImage {
    debug_assert_eq!(rgba.dimensions(), mask.dimensions());
    let Some((min_x, min_y, max_x, max_y)) = foreground_bounds(mask) else {
        return rgba.clone();
    };

    let (width, height) = mask.dimensions();
    let min_x = min_x.saturating_sub(padding);
    let min_y = min_y.saturating_sub(padding);
    let max_x = (max_x + padding).min(width - 1);
    let max_y = (max_y + padding).min(height - 1);
    let crop_w = max_x - min_x + 1;
    let crop_h = max_y - min_y + 1;

    let mut cropped = imageops::crop_imm(rgba, min_x, min_y, crop_w, crop_h).to_image();
    let cropped_mask = imageops::crop_imm(mask, min_x, min_y, crop_w, crop_h).to_image();
    for (px, m) in cropped.pixels_mut().zip(cropped_mask.pixels()) {
        px.0[3] = if m.0[0] > 0 { 255 } else { 0 };
    }
    cropped
}

/// Inclusive bounding box of nonzero mask pixels, or `None` if the mask is
/// all background.
fn foreground_bounds(mask: &GrayImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in mask.enumerate_pixels() {
        if p.0[0] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }
    bounds
}
