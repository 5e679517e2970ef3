use serde::{Deserialize, Serialize};

/// Pipeline tuning parameters suitable for config files and presets.
///
/// The defaults reproduce the values tuned for typical product shots on a
/// light background; treat them as configuration rather than derived values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineParams {
    /// A pixel counts as "non-white" when all three color channels are at or
    /// below this value (catches faint subjects Otsu misses)
    pub white_threshold: u8,
    /// Smallest connected region kept by the refiner, as a fraction of total
    /// image area
    pub min_region_ratio: f64,
    /// Padding in pixels added around the subject bounding box before cropping
    pub padding: u32,
    /// Gaussian smoothing applied to luminance before Otsu thresholding
    pub blur_sigma: f32,
    /// Radius of the elliptical structuring element (2 ~= a 5x5 ellipse)
    pub morph_radius: u8,
    /// Iterations of morphological closing applied to the raw mask
    pub close_iterations: u8,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            white_threshold: 230,
            min_region_ratio: 0.001,
            padding: 12,
            blur_sigma: 1.1,
            morph_radius: 2,
            close_iterations: 2,
        }
    }
}
