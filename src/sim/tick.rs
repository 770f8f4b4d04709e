//! One generation of the simulation
//!
//! A tick is two phases in fixed order: every agent moves and bounces,
//! then every unordered pair is checked for contact. Pairs are resolved
//! in place, so a nudge or conversion is visible to later pairs in the
//! same tick and one agent can change kind more than once.

use super::arena::Arena;
use super::collision::{pair_mut, resolve_contact};

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    /// Generation reached by this tick
    pub generation: u64,
    /// Overlapping pairs resolved
    pub contacts: u32,
    /// Kind changes applied (an agent converted twice counts twice)
    pub conversions: u32,
}

impl Arena {
    /// Advance the arena by one generation
    pub fn tick(&mut self) -> TickSummary {
        tick(self)
    }
}

/// Advance the arena by one generation
pub fn tick(arena: &mut Arena) -> TickSummary {
    let was_over = arena.is_over();

    motion_phase(arena);
    let mut summary = collision_phase(arena);

    arena.generation += 1;
    summary.generation = arena.generation;

    log::debug!(
        "Generation {}: {} contacts, {} conversions",
        summary.generation,
        summary.contacts,
        summary.conversions
    );
    if !was_over && arena.is_over() {
        log::info!(
            "Generation {}: only {} remain",
            arena.generation,
            arena.winner()
        );
    }

    summary
}

/// Integrate then reflect every agent, in index order
pub(crate) fn motion_phase(arena: &mut Arena) {
    let (width, height) = (arena.width, arena.height);
    for agent in &mut arena.agents {
        agent.integrate();
        agent.reflect(width, height);
    }
}

/// Resolve every overlapping pair `(i, j)`, `i < j`, in index order
pub(crate) fn collision_phase(arena: &mut Arena) -> TickSummary {
    let mut summary = TickSummary::default();
    let n = arena.agents.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(&mut arena.agents, i, j);
            if a.overlaps(b) {
                let result = resolve_contact(a, b);
                summary.contacts += 1;
                summary.conversions += result.converted;
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Agent, Kind};
    use glam::Vec2;

    fn agent(kind: Kind, x: f32, y: f32, vx: f32, vy: f32) -> Agent {
        Agent::with_velocity(kind, Vec2::new(x, y), Vec2::new(vx, vy))
    }

    #[test]
    fn test_head_on_rock_scissors() {
        let mut arena = Arena::from_agents(
            100.0,
            100.0,
            vec![
                agent(Kind::Rock, 40.0, 50.0, 1.0, 0.0),
                agent(Kind::Scissors, 60.0, 50.0, -1.0, 0.0),
            ],
        )
        .unwrap();

        for _ in 0..5 {
            let summary = arena.tick();
            assert_eq!(summary.contacts, 0);
        }
        // Distance is exactly the sum of radii: not a contact
        assert_eq!(arena.agents()[0].x(), 45.0);
        assert_eq!(arena.agents()[1].x(), 55.0);
        assert_eq!(arena.agents()[1].kind(), Kind::Scissors);

        let summary = arena.tick();
        assert_eq!(summary.generation, 6);
        assert_eq!(summary.contacts, 1);
        assert_eq!(summary.conversions, 1);
        assert_eq!(arena.agents()[0].kind(), Kind::Rock);
        assert_eq!(arena.agents()[1].kind(), Kind::Rock);
        // 46 and 54 after motion, then pushed 2 apart each
        assert_eq!(arena.agents()[0].x(), 44.0);
        assert_eq!(arena.agents()[1].x(), 56.0);
        assert_eq!(arena.agents()[0].vx(), 1.0);
        assert_eq!(arena.agents()[1].vx(), -1.0);
        assert!(arena.is_over());
        assert_eq!(arena.winner(), Kind::Rock);
    }

    #[test]
    fn test_no_contact_tick_is_pure_motion() {
        let agents = vec![
            agent(Kind::Rock, 20.0, 20.0, 1.5, 0.5),
            agent(Kind::Paper, 80.0, 20.0, -0.5, 1.0),
            agent(Kind::Scissors, 50.0, 80.0, 0.25, -1.75),
        ];
        let mut expected = agents.clone();
        for a in &mut expected {
            a.integrate();
            a.reflect(100.0, 100.0);
        }

        let mut arena = Arena::from_agents(100.0, 100.0, agents).unwrap();
        let summary = arena.tick();
        assert_eq!(summary.contacts, 0);
        assert_eq!(arena.agents(), expected.as_slice());
    }

    #[test]
    fn test_colocated_pair_converts_in_place() {
        let mut arena = Arena::from_agents(
            100.0,
            100.0,
            vec![
                agent(Kind::Paper, 50.0, 50.0, 0.0, 0.0),
                agent(Kind::Rock, 50.0, 50.0, 0.0, 0.0),
            ],
        )
        .unwrap();
        let summary = arena.tick();
        assert_eq!(summary.contacts, 1);
        assert_eq!(arena.counts().papers, 2);
        assert_eq!(arena.agents()[0].pos(), Vec2::new(50.0, 50.0));
        assert_eq!(arena.agents()[1].pos(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_pairs_resolved_in_place_and_in_order() {
        // Pair (0,1) converts agent 1 to Paper; pair (1,2) then sees a Paper
        // and Scissors wins. Pair (0,2) is never in contact.
        let mut arena = Arena::from_agents(
            200.0,
            100.0,
            vec![
                agent(Kind::Paper, 50.0, 50.0, 0.0, 0.0),
                agent(Kind::Rock, 58.0, 50.0, 0.0, 0.0),
                agent(Kind::Scissors, 69.0, 50.0, 0.0, 0.0),
            ],
        )
        .unwrap();

        let summary = arena.tick();
        // After (0,1): agent 1 pushed to 60, now 9 from agent 2
        assert_eq!(summary.contacts, 2);
        assert_eq!(summary.conversions, 2);
        let kinds: Vec<Kind> = arena.agents().iter().map(Agent::kind).collect();
        assert_eq!(kinds, vec![Kind::Paper, Kind::Scissors, Kind::Scissors]);
    }

    #[test]
    fn test_single_kind_is_absorbing() {
        let mut arena = Arena::from_agents(
            100.0,
            100.0,
            vec![
                agent(Kind::Rock, 30.0, 50.0, 1.0, 0.0),
                agent(Kind::Rock, 36.0, 50.0, -1.0, 0.0),
                agent(Kind::Rock, 70.0, 70.0, 2.0, 2.0),
            ],
        )
        .unwrap();
        assert!(arena.is_over());
        for _ in 0..50 {
            let summary = arena.tick();
            assert_eq!(summary.conversions, 0);
            assert!(arena.is_over());
            assert_eq!(arena.winner(), Kind::Rock);
        }
        assert_eq!(arena.generation(), 50);
    }

    #[test]
    fn test_motion_phase_keeps_agents_inside() {
        let mut arena = Arena::new(100.0, 100.0, 4242).unwrap();
        for _ in 0..300 {
            motion_phase(&mut arena);
            assert!(arena.agents().iter().all(|a| a.is_inside(100.0, 100.0)));
            collision_phase(&mut arena);
        }
    }
}
