//! Console run loop
//!
//! Ticks the arena until one kind remains or the generation cap is hit,
//! printing a frame at a fixed generation interval.

use std::io::Write;
use std::thread;

use crate::error::AppError;
use crate::renderer::{self, frame};
use crate::settings::Settings;
use crate::sim::{Arena, Counts, Kind};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A single kind took over the arena
    Winner(Kind),
    /// The generation cap was reached with several kinds alive
    GenerationCap,
}

/// Final state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub generation: u64,
    pub counts: Counts,
}

/// Owns an arena and paces it to an output stream
pub struct Driver<W: Write> {
    arena: Arena,
    settings: Settings,
    out: W,
}

impl<W: Write> Driver<W> {
    /// Build the standard arena described by `settings`
    pub fn new(settings: Settings, out: W) -> Result<Self, AppError> {
        settings.validate()?;
        let seed = settings.resolve_seed();
        let arena = Arena::new(settings.width, settings.height, seed)?;
        Ok(Self { arena, settings, out })
    }

    /// Drive an arena built elsewhere. Dimension fields of `settings` are ignored.
    pub fn with_arena(arena: Arena, settings: Settings, out: W) -> Result<Self, AppError> {
        settings.validate()?;
        Ok(Self { arena, settings, out })
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run to completion
    pub fn run(&mut self) -> Result<RunReport, AppError> {
        log::info!(
            "Run starting (seed {:?}, cap {} generations)",
            self.arena.seed(),
            self.settings.max_generations
        );
        self.write_intro()?;
        self.write_frame()?;

        let delay = self.settings.frame_delay();
        for step in 0..self.settings.max_generations {
            if self.arena.is_over() {
                break;
            }
            self.arena.tick();

            if step % self.settings.render_interval == 0 {
                self.write_frame()?;
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
        }

        let report = self.report();
        self.write_summary(&report)?;
        log::info!(
            "Run finished at generation {}: {:?}",
            report.generation,
            report.outcome
        );
        Ok(report)
    }

    fn report(&self) -> RunReport {
        let outcome = match self.arena.try_winner() {
            Some(kind) => Outcome::Winner(kind),
            None => Outcome::GenerationCap,
        };
        RunReport {
            outcome,
            generation: self.arena.generation(),
            counts: self.arena.counts(),
        }
    }

    fn write_intro(&mut self) -> std::io::Result<()> {
        let counts = self.arena.counts();
        writeln!(self.out, "Rock Paper Scissors Simulator")?;
        writeln!(self.out, "=============================")?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Starting simulation with {} Rocks, {} Papers, and {} Scissors...",
            counts.rocks, counts.papers, counts.scissors
        )?;
        writeln!(self.out, "Legend: R = Rock, P = Paper, S = Scissors")
    }

    fn write_frame(&mut self) -> std::io::Result<()> {
        write!(self.out, "{}", frame(&self.arena))?;
        self.out.flush()
    }

    fn write_summary(&mut self, report: &RunReport) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", renderer::rule())?;
        writeln!(self.out, "SIMULATION COMPLETE!")?;
        self.write_frame()?;
        match report.outcome {
            Outcome::Winner(kind) => writeln!(self.out, "\nWinner: {kind}!")?,
            Outcome::GenerationCap => {
                writeln!(self.out, "\nSimulation ended after maximum generations.")?
            }
        }
        self.out.flush()
    }
}
