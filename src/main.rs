use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info};

use data_processor::cli::{self, Args};
use data_processor::logging::{self, LOG_FILE};

fn main() -> ExitCode {
    // Logging comes first so usage errors reach the log file too.
    if let Err(err) = logging::init_logging(Path::new(LOG_FILE)) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            error!("Usage: data-processor <input_file>");
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match cli::run(&args) {
        Ok(output) => {
            info!(
                "Processing completed successfully. Results written to {}",
                output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Error processing data: {err}");
            ExitCode::FAILURE
        }
    }
}
