//! Foreground mask construction and refinement.
//!
//! The builder combines an inverted Otsu threshold on smoothed luminance
//! with a fixed near-white color-range exclusion, then cleans the result
//! with standard morphology. The refiner reduces the mask to its single
//! largest connected region, filled solid.
use image::{GrayImage, Luma, RgbaImage, imageops};
use imageproc::contours::{BorderType, Contour, find_contours};
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use imageproc::distance_transform::Norm;
use imageproc::drawing::draw_polygon_mut;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::{close, dilate, open};
use imageproc::point::Point;

use crate::core::params::PipelineParams;

/// Build a binary mask where 255 marks "likely product pixel".
///
/// Assumes a predominantly light background. Never fails; the result may be
/// all-background. The returned mask always matches the raster's dimensions.
pub fn build_foreground_mask(rgba: &RgbaImage, params: &PipelineParams) -> GrayImage {
    let gray = imageops::grayscale(rgba);
    let blurred = gaussian_blur_f32(&gray, params.blur_sigma);

    // Darker-than-threshold pixels become foreground.
    let level = otsu_level(&blurred);
    let mut mask = threshold(&blurred, level, ThresholdType::BinaryInverted);

    // OR in pixels that are merely "not white enough"; a global Otsu level
    // misses faint, light-colored subjects.
    let w = params.white_threshold;
    for (m, p) in mask.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, _] = p.0;
        if r <= w && g <= w && b <= w {
            m.0[0] = 255;
        }
    }

    // Close gaps, drop specks, then expand slightly. The disk radius
    // approximates a 5x5 elliptical structuring element; stacked closing
    // iterations compose into a single close with a scaled radius.
    let radius = params.morph_radius;
    let mask = close(&mask, Norm::L2, radius * params.close_iterations);
    let mask = open(&mask, Norm::L2, radius);
    dilate(&mask, Norm::L2, radius)
}

/// Keep only the largest connected foreground region, filled solid.
///
/// Returns the input unchanged when there are no regions, or when the
/// largest one covers less than `min_region_ratio` of the image area
/// (such a mask is treated as noise rather than emptied out).
/// Idempotent: refining a refined mask yields the same mask.
pub fn keep_largest_region(mask: &GrayImage, min_region_ratio: f64) -> GrayImage {
    let contours = find_contours::<i32>(mask);

    let mut largest: Option<&Contour<i32>> = None;
    let mut largest_area = 0.0f64;
    for contour in &contours {
        if contour.border_type != BorderType::Outer {
            continue;
        }
        let area = contour_area(&contour.points);
        if area > largest_area {
            largest_area = area;
            largest = Some(contour);
        }
    }

    let Some(largest) = largest else {
        return mask.clone();
    };

    let (width, height) = mask.dimensions();
    let total_area = f64::from(width) * f64::from(height);
    if largest_area < total_area * min_region_ratio {
        return mask.clone();
    }

    let mut result = GrayImage::new(width, height);
    fill_contour(&mut result, &largest.points);
    result
}

/// Shoelace area of a closed boundary polygon. Degenerate boundaries
/// (fewer than three points) have zero area.
fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        acc += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
    }
    acc.abs() as f64 / 2.0
}

/// Rasterize a boundary as a filled polygon, closing interior holes.
fn fill_contour(canvas: &mut GrayImage, points: &[Point<i32>]) {
    let mut poly = points.to_vec();
    // draw_polygon_mut expects an open path.
    if poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        for p in &poly {
            if let Some(px) = canvas.get_pixel_mut_checked(p.x as u32, p.y as u32) {
                px.0[0] = 255;
            }
        }
        return;
    }
    draw_polygon_mut(canvas, &poly, Luma([255u8]));
}
