//! Agent kinds and the cyclic dominance rule

use std::fmt;

/// The three kinds an agent can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Rock,
    Paper,
    Scissors,
}

impl Kind {
    /// Every kind, in initialization order
    pub const ALL: [Kind; 3] = [Kind::Rock, Kind::Paper, Kind::Scissors];

    /// The kind this one converts on contact
    pub fn prey(self) -> Kind {
        match self {
            Kind::Rock => Kind::Scissors,
            Kind::Scissors => Kind::Paper,
            Kind::Paper => Kind::Rock,
        }
    }

    /// Returns true if `self` converts `other` on contact
    pub fn beats(self, other: Kind) -> bool {
        self.prey() == other
    }

    /// Single-character grid symbol
    pub fn symbol(self) -> char {
        match self {
            Kind::Rock => 'R',
            Kind::Paper => 'P',
            Kind::Scissors => 'S',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Rock => "Rock",
            Kind::Paper => "Paper",
            Kind::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind both agents take after contact
///
/// Identical kinds are left alone; otherwise the kind that beats the
/// other wins. Symmetric in its arguments.
pub fn winner(a: Kind, b: Kind) -> Kind {
    if a == b || a.beats(b) { a } else { b }
}
