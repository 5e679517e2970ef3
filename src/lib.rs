#![doc = r#"
cutout — batch background removal and auto-cropping for product photographs.

This crate turns a directory of product shots (JPEG/PNG/WebP, light
background) into cropped PNGs with a straight, strictly binary alpha channel.
It powers the `cutout` CLI and can be embedded in your own Rust applications.

The per-file pipeline is a single straight-line pass:

1. decode and normalize to 8-bit RGBA;
2. build a foreground mask (inverted Otsu on smoothed luminance, OR a fixed
   near-white color exclusion, then close/open/dilate);
3. keep only the largest connected region, filled solid;
4. write the mask into the alpha channel (binary, no feathering);
5. crop to the padded subject bounding box.

Quick start: process a directory
--------------------------------
```rust,no_run
use std::path::Path;
use cutout::{PipelineParams, process_directory_to_path};

fn main() -> cutout::Result<()> {
    let report = process_directory_to_path(Path::new("/photos/products"), &PipelineParams::default())?;
    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Process a single file in memory
-------------------------------
```rust,no_run
use std::path::Path;
use cutout::{PipelineParams, process_file_to_buffer};

fn main() -> cutout::Result<()> {
    let rgba = process_file_to_buffer(Path::new("/photos/products/mug.jpg"), &PipelineParams::default())?;
    assert!(rgba.pixels().all(|p| p.0[3] == 0 || p.0[3] == 255));
    Ok(())
}
```

Error handling
--------------
All public functions return `cutout::Result<T>`; match on `cutout::Error` to
handle specific cases. The batch helpers catch per-file errors internally and
report them in the returned `BatchReport` — a bad file never aborts a batch.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — mask construction, refinement, compositing, cropping.
- [`io`] — directory scanning, decoding, PNG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;

// Curated public API surface
pub use crate::core::params::PipelineParams;
pub use crate::error::{Error, Result};

pub use crate::io::scan::{ManifestEntry, OUTPUT_PREFIX, SUPPORTED_EXTENSIONS, scan_directory};

pub use crate::api::{
    BatchReport, process_directory_to_path, process_file_to_buffer, process_file_to_path,
};
