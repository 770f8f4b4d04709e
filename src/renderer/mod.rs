//! Console rendering
//!
//! Turns an arena into the text frame printed by the driver.

pub mod grid;

pub use grid::AsciiGrid;

use std::fmt::Write;

use crate::sim::Arena;

/// Width of the `=` rule above each frame
pub const RULE_WIDTH: usize = 50;

/// Full status frame: generation, population and the grid
pub fn frame(arena: &Arena) -> String {
    let counts = arena.counts();
    let grid = AsciiGrid::from_agents(arena.agents(), arena.width(), arena.height());

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Generation: {}", arena.generation());
    let _ = writeln!(
        out,
        "Rocks: {} | Papers: {} | Scissors: {}",
        counts.rocks, counts.papers, counts.scissors
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Simulation Box ({}x{}):", arena.width(), arena.height());
    let _ = write!(out, "{grid}");
    out
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
