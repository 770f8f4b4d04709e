//! Property tests for the arena invariants
//!
//! Every property runs against randomly seeded, randomly sized standard
//! arenas.

use proptest::prelude::*;
use rps_arena::consts::{AGENT_RADIUS, SEPARATION};
use rps_arena::sim::{Arena, Kind, winner};

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![Just(Kind::Rock), Just(Kind::Paper), Just(Kind::Scissors)]
}

fn standard_arena() -> impl Strategy<Value = Arena> {
    (any::<u64>(), 30.0f32..300.0, 30.0f32..300.0)
        .prop_map(|(seed, w, h)| Arena::new(w, h, seed).expect("dimensions are valid"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dominance_is_symmetric(a in kind(), b in kind()) {
        prop_assert_eq!(winner(a, b), winner(b, a));
        prop_assert_eq!(winner(a, a), a);
        let w = winner(a, b);
        prop_assert!(w == a || w == b);
    }

    #[test]
    fn population_is_conserved(mut arena in standard_arena(), ticks in 1usize..200) {
        let n = arena.len();
        prop_assert_eq!(n, 15);
        for _ in 0..ticks {
            arena.tick();
            prop_assert_eq!(arena.len(), n);
            prop_assert_eq!(arena.counts().total(), n);
        }
    }

    #[test]
    fn generation_counts_ticks(mut arena in standard_arena(), ticks in 1u64..100) {
        for expected in 1..=ticks {
            let summary = arena.tick();
            prop_assert_eq!(summary.generation, expected);
            prop_assert_eq!(arena.generation(), expected);
        }
    }

    #[test]
    fn agents_stay_near_the_box(mut arena in standard_arena(), ticks in 1usize..200) {
        let (w, h) = (arena.width(), arena.height());
        // Reflection puts every agent inside; at most n - 1 nudges can follow
        let slack = SEPARATION * (arena.len() - 1) as f32;
        for _ in 0..ticks {
            let summary = arena.tick();
            for agent in arena.agents() {
                if summary.contacts == 0 {
                    prop_assert!(agent.is_inside(w, h));
                }
                prop_assert!(agent.x() >= AGENT_RADIUS - slack && agent.x() <= w - AGENT_RADIUS + slack);
                prop_assert!(agent.y() >= AGENT_RADIUS - slack && agent.y() <= h - AGENT_RADIUS + slack);
            }
        }
    }

    #[test]
    fn single_kind_is_absorbing(mut arena in standard_arena()) {
        let mut decided: Option<Kind> = None;
        for _ in 0..1500 {
            arena.tick();
            match decided {
                Some(survivor) => {
                    prop_assert!(arena.is_over());
                    prop_assert_eq!(arena.winner(), survivor);
                }
                None if arena.is_over() => decided = Some(arena.winner()),
                None => {}
            }
        }
    }

    #[test]
    fn same_seed_same_history(seed in any::<u64>()) {
        let mut a = Arena::new(100.0, 100.0, seed).unwrap();
        let mut b = Arena::new(100.0, 100.0, seed).unwrap();
        prop_assert_eq!(a.agents(), b.agents());
        for _ in 0..100 {
            prop_assert_eq!(a.tick(), b.tick());
            prop_assert_eq!(a.agents(), b.agents());
        }
    }
}
