use crate::config::DEFAULT_LOG_LEVEL;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// File name prefix of rotated log files, `<prefix>.<date>.log`
pub const LOG_FILE_PREFIX: &str = "deny-filter-stdio";

/// Keeps the file writer alive until `flush_logger` is called
static GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Installs the global subscriber.
///
/// stdout carries responses, so logs go to daily-rotated files in `dir` when
/// it is usable and to stderr otherwise. Repeated calls keep the first
/// subscriber.
pub fn init_logger(level: Option<&str>, dir: Option<&str>) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(level_filter(level))
        .with_target(false);

    let result = match dir.and_then(|dir| file_appender(Path::new(dir))) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            *GUARD.lock().unwrap_or_else(PoisonError::into_inner) = Some(guard);
            builder.with_ansi(false).with_writer(writer).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}

/// Filter for `level`; unparsable or missing levels fall back to `info`.
#[must_use]
pub fn level_filter(level: Option<&str>) -> EnvFilter {
    let level = level.unwrap_or(DEFAULT_LOG_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{level}': {e}, using '{DEFAULT_LOG_LEVEL}'");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}

/// Daily-rotated appender writing into `dir`, created if missing.
#[must_use]
pub fn file_appender(dir: &Path) -> Option<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| {
            eprintln!("Cannot log to '{}': {e}, logging to stderr", dir.display());
        })
        .ok()
}

/// Flushes pending file output; later events are dropped by the file writer.
pub fn flush_logger() {
    let guard = GUARD.lock().unwrap_or_else(PoisonError::into_inner).take();
    drop(guard);
}
