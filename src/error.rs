//! Crate-level error type and `Result` alias.
//! Covers I/O failures, undecodable inputs, unsupported pixel layouts,
//! and a semantic variant for unexpected per-file processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("невозможно открыть файл: {0}")]
    Decode(#[from] image::ImageError),

    #[error("неподдерживаемый формат: {color}")]
    UnsupportedLayout { color: String },

    #[error("Processing error: {0}")]
    Processing(String),
}
