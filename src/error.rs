//! Error types for grid construction and configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when constructing a grid.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Indicates an invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// The per-grid worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors raised while loading a simulation config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] LifeError),
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
