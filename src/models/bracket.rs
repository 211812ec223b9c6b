//! BracketMatch, Round, and RoundLabel for the single-elimination display.

use crate::models::participant::Participant;
use serde::{Serialize, Serializer};
use std::fmt;

/// A pairing inside a round. `second` is `None` for a bye.
///
/// There is no result model: the winner is always the first slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct BracketMatch<'a> {
    pub first: &'a Participant,
    pub second: Option<&'a Participant>,
    pub winner: &'a Participant,
}

impl<'a> BracketMatch<'a> {
    /// Pair two entrants; the first one advances.
    pub fn new(first: &'a Participant, second: Option<&'a Participant>) -> Self {
        Self {
            first,
            second,
            winner: first,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.second.is_none()
    }
}

/// Display name of a round, chosen by how far it is from the final.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RoundLabel {
    Final,
    SemiFinal,
    QuarterFinal,
    RoundOf16,
    RoundOf32,
    /// Rounds further out than the named ones; holds the 1-indexed round number.
    Numbered(usize),
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundLabel::Final => write!(f, "Final"),
            RoundLabel::SemiFinal => write!(f, "Semi-final"),
            RoundLabel::QuarterFinal => write!(f, "Quarter-final"),
            RoundLabel::RoundOf16 => write!(f, "Round of 16"),
            RoundLabel::RoundOf32 => write!(f, "Round of 32"),
            RoundLabel::Numbered(n) => write!(f, "Round {}", n),
        }
    }
}

impl Serialize for RoundLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One elimination stage, first round has `number == 1`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Round<'a> {
    pub number: usize,
    pub label: RoundLabel,
    pub matches: Vec<BracketMatch<'a>>,
}

impl<'a> Round<'a> {
    /// Entrants advancing out of this round, one per match, in pairing order.
    pub fn winners(&self) -> Vec<&'a Participant> {
        self.matches.iter().map(|m| m.winner).collect()
    }
}
