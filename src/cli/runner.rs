use tracing::info;

use cutout::api::process_file_to_path;
use cutout::core::params::PipelineParams;
use cutout::io::scan::scan_directory;
use cutout::io::writer::output_name;

use super::args::CliArgs;

/// Run the batch over the given directory.
///
/// The console contract is fixed: one line per processed file
/// (`input -> output`), one line per failure, and a single informational
/// message when there is nothing to do. Per-file failures never abort the
/// batch and do not change the exit status.
pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let manifest = scan_directory(&args.dir)?;
    if manifest.is_empty() {
        println!("Нет подходящих файлов для обработки.");
        return Ok(());
    }

    info!("Starting batch processing from directory: {:?}", args.dir);
    let params = PipelineParams::default();

    let mut processed = 0;
    let mut errors = 0;
    for entry in &manifest {
        let output_name = output_name(entry.index);
        let output_path = args.dir.join(&output_name);

        match process_file_to_path(&entry.path, &output_path, &params) {
            Ok(()) => {
                println!("{} -> {}", entry.file_name(), output_name);
                processed += 1;
            }
            Err(e) => {
                println!("Не удалось обработать {}: {}", entry.file_name(), e);
                errors += 1;
            }
        }
    }

    info!("Batch processing complete!");
    info!("Processed: {}", processed);
    info!("Errors: {}", errors);

    Ok(())
}
