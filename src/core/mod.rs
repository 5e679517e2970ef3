//! Core processing building blocks: mask construction and refinement,
//! alpha compositing, and subject cropping. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
