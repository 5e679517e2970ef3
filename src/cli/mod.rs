//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) for batch processing. It wires user-provided options
//! to the underlying library functionality exposed via `cutout::api`.
//!
//! If you are embedding cutout into another application, prefer using
//! the high-level `cutout::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
