//! Run settings
//!
//! Defaults give the classic 100x100, 1000-generation console run. A TOML
//! file can override any subset of fields; command-line flags go on top.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

/// Settings for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width in simulation units
    pub width: f32,
    /// Arena height in simulation units
    pub height: f32,
    /// Seed for the initial population (wall clock when unset)
    pub seed: Option<u64>,
    /// Stop after this many generations even without a winner
    pub max_generations: u64,
    /// Print a frame every this many generations
    pub render_interval: u64,
    /// Pause after each printed frame
    pub frame_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            max_generations: DEFAULT_MAX_GENERATIONS,
            render_interval: DEFAULT_RENDER_INTERVAL,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. Missing fields keep their defaults.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the driver cannot run with.
    ///
    /// Arena dimensions are checked when the arena is built.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_generations == 0 {
            return Err(SettingsError::Zero {
                field: "max_generations",
            });
        }
        if self.render_interval == 0 {
            return Err(SettingsError::Zero {
                field: "render_interval",
            });
        }
        Ok(())
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Configured seed, or one derived from the wall clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
