//! Application errors

use thiserror::Error;

use crate::settings::SettingsError;
use crate::sim::ArenaError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("invalid arena: {0}")]
    Arena(#[from] ArenaError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
