use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cutout", version, about = "Batch background removal for product photos")]
pub struct CliArgs {
    /// Directory containing product photos; numbered PNG outputs are
    /// written back into the same directory
    pub dir: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
