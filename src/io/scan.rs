//! Directory scanner: candidate discovery, output exclusion, deterministic
//! ordering, and output index assignment.
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Extensions considered for processing (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// File names starting with this prefix are treated as the program's own
/// outputs and never reprocessed.
pub const OUTPUT_PREFIX: &str = "image";

/// An input file paired with its assigned 1-based output index.
/// Created once per run during the directory scan; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub index: usize,
    pub path: PathBuf,
}

impl ManifestEntry {
    /// Base name of the input file, for console reporting.
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or(Cow::Borrowed(""))
    }
}

/// List candidate files in `dir`: supported extension, not an output of a
/// previous run, sorted by name. Indices are assigned in sorted order and
/// keep their position even if a file later fails to process.
pub fn scan_directory(dir: &Path) -> Result<Vec<ManifestEntry>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !has_supported_extension(&path) || is_own_output(&path) {
            continue;
        }
        candidates.push(path);
    }
    candidates.sort();

    Ok(candidates
        .into_iter()
        .enumerate()
        .map(|(i, path)| ManifestEntry { index: i + 1, path })
        .collect())
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.iter().any(|s| e.eq_ignore_ascii_case(s)))
}

fn is_own_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(OUTPUT_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn filters_sorts_and_indexes_candidates() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "A.JPG", "notes.txt", "image9.png", "c.webp"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let manifest = scan_directory(dir.path()).unwrap();
        let names: Vec<_> = manifest.iter().map(|e| e.file_name().into_owned()).collect();
        assert_eq!(names, ["A.JPG", "b.png", "c.webp"]);
        let indices: Vec<_> = manifest.iter().map(|e| e.index).collect();
        assert_eq!(indices, [1, 2, 3]);
    }

    #[test]
    fn previous_outputs_are_excluded() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("image1.png")).unwrap();
        File::create(dir.path().join("image2.png")).unwrap();

        let manifest = scan_directory(dir.path()).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn empty_directory_yields_empty_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = scan_directory(dir.path()).unwrap();
        assert!(manifest.is_empty());
    }
}
