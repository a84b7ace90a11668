//! Tracing setup: stdout plus one log file per launch under `.placement/logs`.
//!
//! Verbosity and retention come from the `[logging]` section of the app
//! config. `RUST_LOG`, when set, replaces the configured filter.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, filter::ParseError, fmt, prelude::*};

use crate::app_dirs::{self, AppDirError};
use crate::config::LoggingSettings;

const LOG_FILE_PREFIX: &str = "placement_";
const LOG_FILE_SUFFIX: &str = ".log";

/// Keeps the file writer flushing for the life of the process.
struct LogSession {
    _guard: WorkerGuard,
    path: PathBuf,
}

static SESSION: OnceLock<LogSession> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The `.placement/logs` directory could not be resolved or created.
    #[error(transparent)]
    LogDir(#[from] AppDirError),
    /// The configured filter is not valid `tracing` directive syntax.
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter { filter: String, source: ParseError },
    /// Failed to list earlier log files for pruning.
    #[error("Failed to read log directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to remove a log file beyond the retention limit.
    #[error("Failed to remove old log file {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log filename time: {0}")]
    FormatTime(time::error::Format),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber and return this launch's log file path.
///
/// Only the first call installs anything; later calls return the same path.
pub fn init(settings: &LoggingSettings) -> Result<PathBuf, LoggingError> {
    if let Some(session) = SESSION.get() {
        return Ok(session.path.clone());
    }

    let filter = build_env_filter(settings)?;
    let log_dir = app_dirs::logs_dir()?;
    let file_name = session_file_name(now_local_or_utc())?;
    let pruned = prune_session_logs(&log_dir, settings.max_files.saturating_sub(1))?;

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::never(&log_dir, &file_name));
    let timer = build_timer();
    let stdout_layer = fmt::layer()
        .with_timer(timer.clone())
        .with_writer(std::io::stdout);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(timer)
        .with_writer(file_writer);
    let subscriber = Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber).map_err(LoggingError::SetGlobal)?;

    let path = log_dir.join(file_name);
    let _ = SESSION.set(LogSession {
        _guard: guard,
        path: path.clone(),
    });
    tracing::info!(
        log_file = %path.display(),
        max_files = settings.max_files,
        pruned,
        "Logging initialized"
    );
    Ok(path)
}

fn build_env_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => configured_filter(settings),
    }
}

fn configured_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(&settings.filter).map_err(|source| LoggingError::InvalidFilter {
        filter: settings.filter.clone(),
        source,
    })
}

fn is_session_log(name: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX) && name.ends_with(LOG_FILE_SUFFIX)
}

/// Delete the oldest `placement_*.log` files until at most `keep` remain.
///
/// Session names embed a zero-padded timestamp, so name order is launch order.
/// Other files in the directory are never touched.
fn prune_session_logs(dir: &Path, keep: usize) -> Result<usize, LoggingError> {
    let mut names = fs::read_dir(dir)
        .map_err(|source| LoggingError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_session_log(name))
        .collect::<Vec<_>>();
    names.sort();

    let excess = names.len().saturating_sub(keep);
    for name in &names[..excess] {
        let path = dir.join(name);
        fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile { path, source })?;
    }
    Ok(excess)
}

fn session_file_name(started: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let stamp = started.format(NAME_FORMAT).map_err(LoggingError::FormatTime)?;
    Ok(format!("{LOG_FILE_PREFIX}{stamp}{LOG_FILE_SUFFIX}"))
}

fn build_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
