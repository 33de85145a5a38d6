//! Path resolution for configuration and log files.
//!
//! Everything lives in `~/.pomodoro/`:
//! - `config.yaml` - Startup defaults (read, never written)
//! - `pomodoro.log` - Diagnostic log when verbose logging is enabled

use std::path::{Path, PathBuf};

use crate::error::PomodoroError;

/// Paths to configuration and log files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `~/.pomodoro/config.yaml`
    pub config_file: PathBuf,
    /// Log file: `~/.pomodoro/pomodoro.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomodoroError> {
        let home = std::env::var("HOME")
            .map_err(|_| PomodoroError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(&PathBuf::from(home).join(".pomodoro")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomodoro.log"),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(Path::new(".pomodoro"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomodoro");
        let paths = Paths::with_root(&root);

        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("pomodoro.log"));
    }
}
