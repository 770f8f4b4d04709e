//! Arena state and population queries
//!
//! The arena owns every agent for its whole lifetime. Agents are never
//! added or removed after construction; indices are their only identity.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::agent::Agent;
use super::kind::Kind;
use crate::consts::{AGENT_RADIUS, AGENTS_PER_KIND, SPAWN_MARGIN};

/// Construction failures. All of them are caller bugs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArenaError {
    #[error("arena dimensions must be finite and positive, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("arena {width}x{height} is too small, each side must be at least {min}")]
    ArenaTooSmall { width: f32, height: f32, min: f32 },
    #[error("agent {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },
}

/// Population per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub rocks: usize,
    pub papers: usize,
    pub scissors: usize,
}

impl Counts {
    pub fn get(&self, kind: Kind) -> usize {
        match kind {
            Kind::Rock => self.rocks,
            Kind::Paper => self.papers,
            Kind::Scissors => self.scissors,
        }
    }

    pub fn total(&self) -> usize {
        self.rocks + self.papers + self.scissors
    }

    /// Number of kinds with at least one agent
    pub fn survivors(&self) -> usize {
        Kind::ALL.iter().filter(|&&k| self.get(k) > 0).count()
    }

    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (self.rocks, self.papers, self.scissors)
    }

    fn record(&mut self, kind: Kind) {
        match kind {
            Kind::Rock => self.rocks += 1,
            Kind::Paper => self.papers += 1,
            Kind::Scissors => self.scissors += 1,
        }
    }
}

/// The bounded rectangle holding all agents
#[derive(Debug, Clone)]
pub struct Arena {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) agents: Vec<Agent>,
    pub(crate) generation: u64,
    seed: Option<u64>,
}

impl Arena {
    /// Smallest side length accepted by `new`
    pub const MIN_SIDE: f32 = 2.0 * AGENT_RADIUS + 2.0 * SPAWN_MARGIN;

    /// Create an arena with the standard population.
    ///
    /// Five rounds of Rock, Paper, Scissors are spawned in that order. Each
    /// agent draws x, y, then its velocity from a `Pcg32` seeded with `seed`,
    /// so equal seeds and dimensions give identical arenas.
    pub fn new(width: f32, height: f32, seed: u64) -> Result<Self, ArenaError> {
        check_dimensions(width, height)?;
        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(ArenaError::ArenaTooSmall {
                width,
                height,
                min: Self::MIN_SIDE,
            });
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut agents = Vec::with_capacity(AGENTS_PER_KIND * Kind::ALL.len());
        for _ in 0..AGENTS_PER_KIND {
            for kind in Kind::ALL {
                let pos = spawn_position(&mut rng, width, height);
                agents.push(Agent::new(kind, pos, &mut rng));
            }
        }

        log::info!(
            "Arena {}x{} created with {} agents (seed {})",
            width,
            height,
            agents.len(),
            seed
        );

        Ok(Self {
            width,
            height,
            agents,
            generation: 0,
            seed: Some(seed),
        })
    }

    /// Create an arena around an explicit population.
    ///
    /// Agents keep their given order, which is also their collision order.
    pub fn from_agents(width: f32, height: f32, agents: Vec<Agent>) -> Result<Self, ArenaError> {
        check_dimensions(width, height)?;
        for (index, agent) in agents.iter().enumerate() {
            let radius = agent.radius();
            if !(radius.is_finite() && radius > 0.0) {
                return Err(ArenaError::InvalidRadius { index, radius });
            }
            if width <= 2.0 * radius || height <= 2.0 * radius {
                return Err(ArenaError::ArenaTooSmall {
                    width,
                    height,
                    min: 2.0 * radius,
                });
            }
        }

        Ok(Self {
            width,
            height,
            agents,
            generation: 0,
            seed: None,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Ticks completed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Seed used for the initial population, if it was generated
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Read-only view of every agent, in index order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn counts(&self) -> Counts {
        let mut counts = Counts::default();
        for agent in &self.agents {
            counts.record(agent.kind);
        }
        counts
    }

    /// True once at most one kind is left. Absorbing under `tick`.
    pub fn is_over(&self) -> bool {
        self.counts().survivors() <= 1
    }

    /// The surviving kind, or `None` while more than one kind remains.
    ///
    /// An empty arena reports `Rock`.
    pub fn try_winner(&self) -> Option<Kind> {
        let counts = self.counts();
        match counts.survivors() {
            0 => Some(Kind::Rock),
            1 => Kind::ALL.into_iter().find(|&k| counts.get(k) > 0),
            _ => None,
        }
    }

    /// The surviving kind.
    ///
    /// # Panics
    ///
    /// Panics if more than one kind remains; check `is_over` first.
    pub fn winner(&self) -> Kind {
        match self.try_winner() {
            Some(kind) => kind,
            None => panic!(
                "winner() called at generation {} with counts {:?}",
                self.generation,
                self.counts().as_tuple()
            ),
        }
    }
}

fn check_dimensions(width: f32, height: f32) -> Result<(), ArenaError> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(ArenaError::InvalidDimensions { width, height })
    }
}

/// Uniform position in `[margin, side - margin]` on both axes, x first
fn spawn_position<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Vec2 {
    let x = rng.random_range(SPAWN_MARGIN..=width - SPAWN_MARGIN);
    let y = rng.random_range(SPAWN_MARGIN..=height - SPAWN_MARGIN);
    Vec2::new(x, y)
}
