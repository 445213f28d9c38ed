//! Core runtime configuration.
//!
//! # Responsibility
//! - Resolve where the local store file and rolling logs live.
//! - Carry the log level chosen by the host.
//!
//! # Invariants
//! - Store and logs share one data directory.
//! - A resolved data directory is absolute; relative overrides are joined
//!   onto the working directory.
//! - An empty override is treated as unset.

use crate::logging::default_log_level;
use log::warn;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "POCKET_DATA_DIR";
/// Default store file name inside the data directory.
pub const DEFAULT_DB_FILE_NAME: &str = "pocket.sqlite3";
const LOG_DIR_NAME: &str = "logs";
const DEFAULT_DATA_DIR_NAME: &str = "katya-pocket";

/// Paths and levels needed to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    pub db_file_name: String,
    pub log_level: String,
}

impl CoreConfig {
    /// Builds a config rooted at `data_dir` with default file name and level.
    pub fn from_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            log_level: default_log_level().to_string(),
        }
    }

    /// Resolves the data directory from an explicit value, then
    /// `POCKET_DATA_DIR`, then the system temp directory.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(dir) = explicit.filter(|dir| !dir.as_os_str().is_empty()) {
            return Self::from_data_dir(absolutize(dir));
        }
        if let Ok(raw) = std::env::var(DATA_DIR_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Self::from_data_dir(absolutize(Path::new(trimmed)));
            }
        }
        Self::from_data_dir(absolutize(
            &std::env::temp_dir().join(DEFAULT_DATA_DIR_NAME),
        ))
    }

    /// Returns a copy with the given log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Full path of the store file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    /// Directory for rolling log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

fn absolutize(dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(err) => {
            warn!(
                "event=config_resolve module=config status=soft_fail reason=no_cwd error={}",
                err
            );
            dir.to_path_buf()
        }
    }
}
