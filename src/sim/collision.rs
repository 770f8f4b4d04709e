//! Contact resolution between two agents
//!
//! Overlapping agents both take the dominant kind and are pushed apart
//! along the line between their centers. Velocities are never touched.

use glam::Vec2;

use super::agent::Agent;
use super::kind::winner;
use crate::consts::SEPARATION;

/// Result of resolving one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactResult {
    /// Number of the two agents whose kind changed (at most one)
    pub converted: u32,
    /// Whether the separation nudge was applied
    pub separated: bool,
}

/// Apply the dominance rule and separation nudge to an overlapping pair.
///
/// The caller is responsible for the overlap test.
pub fn resolve_contact(a: &mut Agent, b: &mut Agent) -> ContactResult {
    let kind = winner(a.kind, b.kind);
    let converted = u32::from(a.kind != kind) + u32::from(b.kind != kind);
    a.kind = kind;
    b.kind = kind;

    let separated = match separation_offset(a.pos, b.pos) {
        Some(offset) => {
            a.pos += offset;
            b.pos -= offset;
            true
        }
        None => false,
    };

    ContactResult { converted, separated }
}

/// Offset that moves `a` away from `b` by `SEPARATION`.
///
/// Co-located centers have no direction to push along and return `None`.
pub fn separation_offset(a: Vec2, b: Vec2) -> Option<Vec2> {
    let delta = a - b;
    let dist = delta.length();
    if dist > 0.0 {
        Some(delta / dist * SEPARATION)
    } else {
        None
    }
}

/// Mutably borrow two distinct agents of a slice, `i < j`
pub(crate) fn pair_mut(agents: &mut [Agent], i: usize, j: usize) -> (&mut Agent, &mut Agent) {
    debug_assert!(i < j);
    let (head, tail) = agents.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
