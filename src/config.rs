//! Simulation parameters.
//!
//! Everything the grid and the driver loop need is carried explicitly here
//! instead of as process-wide constants, so several independent grids can
//! coexist in one process.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, LifeError};

pub const DEFAULT_COLS: usize = 100;
pub const DEFAULT_ROWS: usize = 100;
/// Probability that a cell starts alive.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.15;
/// Generations per second for the driver loop.
pub const DEFAULT_FPS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub cols: usize,
    pub rows: usize,
    pub live_probability: f64,
    /// Seed for the initial population. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    pub fps: u32,
    /// Worker threads for the per-grid pool; 0 lets rayon decide.
    pub threads: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            seed: None,
            fps: DEFAULT_FPS,
            threads: 0,
        }
    }
}

impl SimConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the user config file if it exists, defaults otherwise.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("toroidal-life")
            .join("config.toml")
    }

    /// Check the construction invariants shared by every grid.
    pub fn validate(&self) -> Result<(), LifeError> {
        validate_grid_params(self.cols, self.rows, self.live_probability)?;
        if self.fps == 0 {
            return Err(LifeError::InvalidConfig("fps must be at least 1"));
        }
        Ok(())
    }
}

pub(crate) fn validate_grid_params(
    cols: usize,
    rows: usize,
    live_probability: f64,
) -> Result<(), LifeError> {
    if cols < 1 {
        return Err(LifeError::InvalidConfig("cols must be at least 1"));
    }
    if rows < 1 {
        return Err(LifeError::InvalidConfig("rows must be at least 1"));
    }
    // NaN fails the range check too
    if !(0.0..=1.0).contains(&live_probability) {
        return Err(LifeError::InvalidConfig(
            "live probability must be within [0, 1]",
        ));
    }
    Ok(())
}
