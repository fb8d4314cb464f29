//! CLI error types.
//!
//! Only the fatal failure classes surface here: per-source and per-event
//! problems are logged and skipped inside the pipeline and never reach
//! this type.

use std::fmt;

use calsync_core::CatalogError;

use crate::config::ConfigError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// A fatal error that aborts the run.
#[derive(Debug)]
pub enum CliError {
    /// The sources configuration could not be loaded.
    Config(ConfigError),
    /// The catalog merge or write failed.
    Catalog(CatalogError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Catalog(err) => write!(f, "catalog error: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Catalog(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}
