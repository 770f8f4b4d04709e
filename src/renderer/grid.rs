//! Character grid rasterization

use std::fmt;

use crate::consts::{GRID_COLS, GRID_ROWS};
use crate::sim::Agent;

/// Fixed-size character grid of the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    cells: [[char; GRID_COLS]; GRID_ROWS],
}

impl AsciiGrid {
    pub const EMPTY: char = '.';

    /// Rasterize agents onto the grid.
    ///
    /// Arena point `(x, y)` lands in cell `(floor(x * cols / width),
    /// floor(y * rows / height))`. The first agent in index order claims a
    /// cell; agents that map outside the grid are skipped.
    pub fn from_agents(agents: &[Agent], width: f32, height: f32) -> Self {
        let mut cells = [[Self::EMPTY; GRID_COLS]; GRID_ROWS];
        for agent in agents {
            let Some((col, row)) = cell_of(agent.x(), agent.y(), width, height) else {
                continue;
            };
            let cell = &mut cells[row][col];
            if *cell == Self::EMPTY {
                *cell = agent.kind().symbol();
            }
        }
        Self { cells }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate rows top to bottom as strings
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

fn cell_of(x: f32, y: f32, width: f32, height: f32) -> Option<(usize, usize)> {
    let col = (x * GRID_COLS as f32 / width).floor();
    let row = (y * GRID_ROWS as f32 / height).floor();
    let in_range = |v: f32, max: usize| v >= 0.0 && v < max as f32;
    if in_range(col, GRID_COLS) && in_range(row, GRID_ROWS) {
        Some((col as usize, row as usize))
    } else {
        None
    }
}
