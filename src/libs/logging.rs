//! Diagnostic log setup.
//!
//! Warnings and errors are appended to a single `error_log.txt` in the data
//! directory, separate from the monthly log files. The file is write-only
//! diagnostic output and is never read back by the program. A setup failure
//! degrades to a console notice; it never stops the application.

use crate::libs::data_dir::DataDir;
use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "error_log.txt";

/// Initializes the diagnostic log, returning the writer guard that must stay
/// alive for the duration of the process.
pub fn init() -> Option<WorkerGuard> {
    match try_init() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Failed to set up the diagnostic log: {}", err);
            None
        }
    }
}

fn try_init() -> Result<WorkerGuard> {
    let data_dir = DataDir::new();
    let appender = tracing_appender::rolling::never(data_dir.ensure()?, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    // Debug mode mirrors diagnostics to the console; otherwise only the file
    // receives them and interactive output stays clean.
    let stdout = std::io::stdout.with_filter(|_| is_debug_mode());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stdout.and(file_writer))
        .with_ansi(false)
        .init();
    Ok(guard)
}
