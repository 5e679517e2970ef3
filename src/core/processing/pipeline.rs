use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::core::params::PipelineParams;
use crate::core::processing::{composite, crop, mask};
use crate::error::Result;
use crate::io::loader::load_rgba;

/// Run the full per-file pipeline: load, mask, refine, composite, crop.
///
/// A single straight-line pass with no state shared across files. Any
/// failure aborts only this file; the caller decides whether to continue
/// the batch.
pub fn process_image(path: &Path, params: &PipelineParams) -> Result<RgbaImage> {
    let rgba = load_rgba(path)?;
    let (width, height) = rgba.dimensions();
    debug!("Loaded {:?}: {}x{}", path, width, height);

    let raw = mask::build_foreground_mask(&rgba, params);
    let refined = mask::keep_largest_region(&raw, params.min_region_ratio);
    let applied = composite::apply_mask(&rgba, &refined);
    let cropped = crop::crop_to_mask(&applied, &refined, params.padding);

    debug!(
        "Cropped {:?}: {}x{} -> {}x{}",
        path,
        width,
        height,
        cropped.width(),
        cropped.height()
    );
    Ok(cropped)
}
