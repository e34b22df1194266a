//! Tracing subscriber setup.
//!
//! Logs go to stderr and, when the log directory is writable, to a daily
//! rolling file (`karrom.log.YYYY-MM-DD`) through a non-blocking writer.
//! `RUST_LOG` overrides the default filter.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "karrom.log";

/// Keeps the file writer flushing. Hold it for the lifetime of the program.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// True when a log file is being written.
    pub fn has_file(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Default filter directive.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "karrom=debug,karrom_cli=debug,info"
    } else {
        "karrom=info,karrom_cli=info,warn"
    }
}

/// Installs the global subscriber.
///
/// A log directory that cannot be created only disables the file layer.
/// Calling this twice leaves the first subscriber in place.
pub fn init_logging(log_dir: &Path, verbose: bool) -> LoggingGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // stderr shows warnings only unless verbose; the file keeps everything
    // the filter lets through.
    let stderr_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .with_filter(stderr_level);

    let (file_layer, file_guard, file_error) = match fs::create_dir_all(log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .boxed();
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if let Some(e) = file_error {
        tracing::warn!(dir = %log_dir.display(), error = %e, "File logging disabled");
    } else if installed {
        tracing::debug!(dir = %log_dir.display(), "Logging initialized");
    }

    LoggingGuard { file_guard }
}
