//! I/O layer: directory scanning, RGBA loading, and PNG writing.
pub mod loader;
pub mod scan;
pub mod writer;

pub use scan::{ManifestEntry, scan_directory};
