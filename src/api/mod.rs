//! High-level, ergonomic library API: process single photos to in-memory
//! rasters or PNG files, plus a batch helper for whole directories. Prefer
//! these entrypoints over the low-level processing modules when embedding.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::params::PipelineParams;
use crate::core::processing::pipeline::process_image;
use crate::error::Result;
use crate::io::scan::scan_directory;
use crate::io::writer::{output_name, write_png};

/// Summary of a directory run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
    /// Paths of the outputs actually written, in processing order.
    pub outputs: Vec<PathBuf>,
}

/// Process one input file to an in-memory RGBA raster (no disk writes).
pub fn process_file_to_buffer(input: &Path, params: &PipelineParams) -> Result<RgbaImage> {
    process_image(input, params)
}

/// Process one input file and write the result as a PNG.
pub fn process_file_to_path(input: &Path, output: &Path, params: &PipelineParams) -> Result<()> {
    let processed = process_image(input, params)?;
    write_png(&processed, output)
}

/// Process every candidate file in `dir`, writing numbered outputs back
/// into the same directory. Individual failures are logged and counted but
/// never abort the batch; a failed file's index is not reused.
pub fn process_directory_to_path(dir: &Path, params: &PipelineParams) -> Result<BatchReport> {
    let manifest = scan_directory(dir)?;
    info!("Batch: {} candidate(s) in {:?}", manifest.len(), dir);

    let mut report = BatchReport::default();
    for entry in &manifest {
        let output = dir.join(output_name(entry.index));
        match process_file_to_path(&entry.path, &output, params) {
            Ok(()) => {
                info!("Processed: {:?} -> {:?}", entry.path, output);
                report.processed += 1;
                report.outputs.push(output);
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", entry.path, e);
                report.errors += 1;
            }
        }
    }
    Ok(report)
}
