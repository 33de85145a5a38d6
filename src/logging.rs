//! Diagnostic logging.
//!
//! The TUI owns the terminal, so logs never go to stdout or stderr. They are
//! written to a file when one is requested (or when `--verbose` is given),
//! and dropped otherwise.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Paths;
use crate::error::PomodoroError;

/// Pick the log file, if any.
///
/// An explicit path wins; `verbose` alone falls back to the default log file.
#[must_use]
pub fn log_target(log_file: Option<&Path>, verbose: bool, paths: &Paths) -> Option<PathBuf> {
    match log_file {
        Some(p) => Some(p.to_path_buf()),
        None if verbose => Some(paths.log_file.clone()),
        None => None,
    }
}

/// Default filter directive for the crate.
#[must_use]
pub const fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "pomodoro_timer=debug"
    } else {
        "pomodoro_timer=info"
    }
}

/// Install the global subscriber writing to `path`.
///
/// `RUST_LOG` overrides the level chosen by `verbose`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(path: &Path, verbose: bool) -> Result<(), PomodoroError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| PomodoroError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target_prefers_explicit_path() {
        let paths = Paths::with_root(Path::new("/tmp/p"));
        let explicit = PathBuf::from("/tmp/x.log");
        assert_eq!(
            log_target(Some(&explicit), false, &paths),
            Some(explicit.clone())
        );
        assert_eq!(log_target(Some(&explicit), true, &paths), Some(explicit));
    }

    #[test]
    fn test_log_target_verbose_uses_default_file() {
        let paths = Paths::with_root(Path::new("/tmp/p"));
        assert_eq!(log_target(None, true, &paths), Some(paths.log_file.clone()));
        assert_eq!(log_target(None, false, &paths), None);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(true), "pomodoro_timer=debug");
        assert_eq!(log_level(false), "pomodoro_timer=info");
    }
}
