//! End-to-end batch behavior over a real temporary directory.
use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, RgbaImage};

use cutout::{PipelineParams, process_directory_to_path, scan_directory};

const PADDING: u32 = 12;

/// A dark rectangular "product" on a white background.
fn product_photo(width: u32, height: u32, x0: u32, y0: u32, w: u32, h: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            img.put_pixel(x, y, Rgb([40, 40, 60]));
        }
    }
    img
}

fn opaque_bbox(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in img.enumerate_pixels() {
        if p.0[3] == 0 {
            continue;
        }
        bbox = Some(match bbox {
            None => (x, y, x, y),
            Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x), d.max(y)),
        });
    }
    bbox
}

fn load_output(dir: &Path, index: usize) -> RgbaImage {
    image::open(dir.join(format!("image{index}.png")))
        .unwrap()
        .to_rgba8()
}

#[test]
fn batch_produces_numbered_outputs_with_binary_alpha() {
    let dir = tempfile::tempdir().unwrap();
    product_photo(200, 200, 60, 70, 50, 40)
        .save(dir.path().join("a.png"))
        .unwrap();
    product_photo(160, 120, 40, 30, 60, 50)
        .save(dir.path().join("b.png"))
        .unwrap();

    let report = process_directory_to_path(dir.path(), &PipelineParams::default()).unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.errors, 0);
    assert!(dir.path().join("image1.png").exists());
    assert!(dir.path().join("image2.png").exists());

    for index in [1, 2] {
        let out = load_output(dir.path(), index);
        assert!(out.pixels().all(|p| p.0[3] == 0 || p.0[3] == 255));
        let opaque = out.pixels().filter(|p| p.0[3] == 255).count();
        assert!(opaque > 0);
        assert!(opaque < (out.width() * out.height()) as usize);
    }
}

#[test]
fn crop_leaves_at_most_padding_around_the_subject() {
    let dir = tempfile::tempdir().unwrap();
    product_photo(200, 200, 60, 70, 50, 40)
        .save(dir.path().join("a.png"))
        .unwrap();

    process_directory_to_path(dir.path(), &PipelineParams::default()).unwrap();
    let out = load_output(dir.path(), 1);

    let (min_x, min_y, max_x, max_y) = opaque_bbox(&out).expect("subject expected in output");
    assert!(min_x <= PADDING);
    assert!(min_y <= PADDING);
    assert!(max_x + PADDING >= out.width() - 1);
    assert!(max_y + PADDING >= out.height() - 1);
}

#[test]
fn corrupt_file_is_reported_and_keeps_its_index() {
    let dir = tempfile::tempdir().unwrap();
    product_photo(120, 120, 30, 30, 40, 40)
        .save(dir.path().join("a.png"))
        .unwrap();
    fs::write(dir.path().join("b.jpg"), b"this is not a jpeg").unwrap();
    product_photo(120, 120, 20, 20, 50, 50)
        .save(dir.path().join("c.png"))
        .unwrap();

    let report = process_directory_to_path(dir.path(), &PipelineParams::default()).unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.errors, 1);

    // Indices follow the sorted candidate list, not a compacted sequence.
    assert!(dir.path().join("image1.png").exists());
    assert!(!dir.path().join("image2.png").exists());
    assert!(dir.path().join("image3.png").exists());
}

#[test]
fn outputs_are_not_rescanned_as_inputs() {
    let dir = tempfile::tempdir().unwrap();
    product_photo(100, 100, 30, 30, 30, 30)
        .save(dir.path().join("a.png"))
        .unwrap();

    process_directory_to_path(dir.path(), &PipelineParams::default()).unwrap();

    let manifest = scan_directory(dir.path()).unwrap();
    let names: Vec<_> = manifest.iter().map(|e| e.file_name().into_owned()).collect();
    assert_eq!(names, ["a.png"]);
}

#[test]
fn empty_directory_produces_no_outputs() {
    let dir = tempfile::tempdir().unwrap();

    let report = process_directory_to_path(dir.path(), &PipelineParams::default()).unwrap();
    assert_eq!(report.processed, 0);
    assert_eq!(report.errors, 0);
    assert!(report.outputs.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
