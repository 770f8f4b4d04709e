//! Deterministic simulation module
//!
//! All population dynamics live here. This module must be pure and deterministic:
//! - Seeded RNG only, and only at construction
//! - Stable iteration order (by agent index)
//! - No rendering or platform dependencies

pub mod agent;
pub mod arena;
pub mod collision;
pub mod kind;
pub mod tick;

pub use agent::Agent;
pub use arena::{Arena, ArenaError, Counts};
pub use collision::{ContactResult, resolve_contact, separation_offset};
pub use kind::{Kind, winner};
pub use tick::{TickSummary, tick};
