//! Store configuration supplied by the host application.
//!
//! # Responsibility
//! - Describe where the checklist database lives and how core logs.
//! - Open a ready-to-use connection from that description.
//!
//! # Invariants
//! - Nothing is read from the environment; the host passes every value.
//! - Logging is only initialized when `log_dir` is set.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::logging::{default_log_level, init_logging, normalize_level, LoggingError};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Where the checklist database is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum DatabaseLocation {
    /// Private database that lives as long as the connection.
    #[default]
    InMemory,
    /// SQLite file, created on first open.
    File(PathBuf),
}

/// Host-provided settings for opening the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub database: DatabaseLocation,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` leaves logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: DatabaseLocation::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Errors from [`StoreConfig::open`].
#[derive(Debug)]
pub enum ConfigError {
    /// Logging settings were rejected or the logger failed to start.
    Logging(LoggingError),
    Db(DbError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "logging setup failed: {err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<DbError> for ConfigError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl StoreConfig {
    /// File-backed configuration with default logging settings.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            database: DatabaseLocation::File(path.into()),
            ..Self::default()
        }
    }

    /// Sets the log directory, enabling file logging on [`open`](Self::open).
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    /// Sets the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Initializes logging (when configured) and opens a migrated connection.
    pub fn open(&self) -> Result<Connection, ConfigError> {
        normalize_level(&self.log_level)?;

        if let Some(log_dir) = &self.log_dir {
            init_logging(&self.log_level, log_dir)?;
        }

        let conn = match &self.database {
            DatabaseLocation::InMemory => open_db_in_memory()?,
            DatabaseLocation::File(path) => open_db(path)?,
        };
        Ok(conn)
    }
}
