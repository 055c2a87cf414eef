//! Logging initialisation for the data-processor binary.
//!
//! Installs a global `tracing` subscriber that writes every event to both
//! `stderr` and an append-only log file, one `timestamp - LEVEL - message`
//! line per event.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use thiserror::Error;
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file written in the current working directory.
pub const LOG_FILE: &str = "data_processing.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {}: {source}", path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Formats events as `2024-01-31 12:00:00,123 - INFO - message`.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(
            writer,
            "{} - {} - ",
            now.format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install global logging if it has not already been configured.
///
/// Events at `INFO` and above go to `stderr` and are appended to
/// `log_path`. Later calls are no-ops.
///
/// # Errors
/// Returns [`LoggingError`] if the log file cannot be opened or the
/// subscriber cannot be installed.
pub fn init_logging(log_path: &Path) -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: log_path.to_path_buf(),
            source,
        })?;

    install_subscriber(file)?;
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(file: File) -> Result<(), LoggingError> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_writer(io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(Arc::new(file));

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
