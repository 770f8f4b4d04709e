//! RPS Arena - a Rock/Paper/Scissors population simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (agents, walls, collisions, conversion)
//! - `renderer`: ASCII snapshot of the arena
//! - `driver`: Paced console run loop
//! - `settings`: Run configuration (TOML file + CLI overrides)

pub mod driver;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{Driver, Outcome, RunReport};
pub use error::AppError;
pub use settings::Settings;
pub use sim::{Agent, Arena, ArenaError, Counts, Kind, TickSummary};

/// Simulation configuration constants
pub mod consts {
    /// Radius shared by every agent
    pub const AGENT_RADIUS: f32 = 5.0;
    /// Maximum absolute value of each initial velocity component (units/tick)
    pub const MAX_SPEED: f32 = 2.0;
    /// Distance from the walls inside which no agent is spawned
    pub const SPAWN_MARGIN: f32 = 10.0;
    /// How far each agent of an overlapping pair is pushed apart
    pub const SEPARATION: f32 = 2.0;
    /// Agents of each kind created at initialization
    pub const AGENTS_PER_KIND: usize = 5;

    /// Reference arena dimensions
    pub const DEFAULT_WIDTH: f32 = 100.0;
    pub const DEFAULT_HEIGHT: f32 = 100.0;

    /// Driver defaults
    pub const DEFAULT_MAX_GENERATIONS: u64 = 1000;
    pub const DEFAULT_RENDER_INTERVAL: u64 = 10;
    pub const DEFAULT_FRAME_DELAY_MS: u64 = 500;

    /// ASCII grid size
    pub const GRID_COLS: usize = 40;
    pub const GRID_ROWS: usize = 20;
}
