//! Output encoding and naming.
use std::path::Path;

use image::RgbaImage;

use crate::error::{Error, Result};

/// Output naming pattern: `image{N}.png`, where N is the file's 1-based
/// position in the sorted candidate list (not derived from the input name).
/// Collisions across reruns are expected and silently overwritten.
pub fn output_name(index: usize) -> String {
    format!("image{index}.png")
}

/// Encode as PNG with a straight, binary alpha channel and persist.
pub fn write_png(rgba: &RgbaImage, path: &Path) -> Result<()> {
    rgba.save(path)
        .map_err(|e| Error::Processing(format!("не удалось сохранить {:?}: {e}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn output_names_are_sequential_pngs() {
        assert_eq!(output_name(1), "image1.png");
        assert_eq!(output_name(42), "image42.png");
    }

    #[test]
    fn png_roundtrip_preserves_binary_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image1.png");

        let mut rgba = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        rgba.put_pixel(1, 1, Rgba([10, 20, 30, 255]));
        write_png(&rgba, &path).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert!(reloaded == rgba);
    }
}
