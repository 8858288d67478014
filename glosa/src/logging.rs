//! Logging setup for the advisory server and CLI.
//!
//! One `tracing-subscriber` registry with:
//! - a non-blocking file layer (the file is truncated when a session starts)
//! - an optional stdout layer for interactive use
//! - an `EnvFilter` that defaults to `info` and honours `RUST_LOG`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Keeps the background log writer alive.
///
/// Dropping this guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    log_path: PathBuf,
}

impl LoggingGuard {
    /// Path of the file being written.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Installs the global subscriber.
///
/// Creates `log_dir` if needed and truncates `log_file` inside it. When
/// `stdout` is set, events are mirrored to the terminal with ANSI colours.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be truncated.
pub fn init_logging(
    log_dir: &Path,
    log_file: &str,
    stdout: bool,
) -> Result<LoggingGuard, io::Error> {
    let log_path = prepare_log_file(log_dir, log_file)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .compact()
    });

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
        log_path,
    })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Creates the directory and empties the file, returning its full path.
fn prepare_log_file(log_dir: &Path, log_file: &str) -> Result<PathBuf, io::Error> {
    fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join(log_file);
    fs::write(&log_path, "")?;
    Ok(log_path)
}

/// Splits a configured log file path into directory and file name.
///
/// A bare file name resolves against the current directory.
pub fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| crate::config::DEFAULT_LOG_FILE.to_string());
    (dir, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // tests cover the file handling around it.

    #[test]
    fn test_prepare_creates_directory_and_file() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("logs");

        let path = prepare_log_file(&dir, "glosa.log").unwrap();

        assert!(dir.is_dir());
        assert_eq!(path, dir.join("glosa.log"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_prepare_truncates_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("glosa.log");
        fs::write(&path, "previous session").unwrap();

        prepare_log_file(temp.path(), "glosa.log").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("/var/log/glosa/server.log"));
        assert_eq!(dir, PathBuf::from("/var/log/glosa"));
        assert_eq!(file, "server.log");

        let (dir, file) = split_log_path(Path::new("bare.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, "bare.log");
    }
}
