//! Single-elimination bracket from a list of approved participants.
//!
//! The whole bracket is rebuilt from scratch on every call; nothing carries over
//! between calls.

use crate::models::{BracketMatch, Participant, Round, RoundLabel};

/// Named rounds, indexed by distance from the final (index 0 is the final itself).
const NAMED_ROUNDS: [RoundLabel; 5] = [
    RoundLabel::Final,
    RoundLabel::SemiFinal,
    RoundLabel::QuarterFinal,
    RoundLabel::RoundOf16,
    RoundLabel::RoundOf32,
];

/// Number of rounds needed for `participants` entrants: `max(1, ceil(log2 n))`, or 0 with nobody.
pub fn round_count(participants: usize) -> usize {
    if participants == 0 {
        return 0;
    }
    (participants.next_power_of_two().trailing_zeros() as usize).max(1)
}

/// Label for round `number` (1-indexed from the first round) out of `total_rounds`.
///
/// Expects `1 <= number <= total_rounds` (checked in debug builds).
pub fn round_label(number: usize, total_rounds: usize) -> RoundLabel {
    debug_assert!(
        (1..=total_rounds).contains(&number),
        "round {} out of range 1..={}",
        number,
        total_rounds
    );
    let distance = total_rounds.saturating_sub(number);
    NAMED_ROUNDS
        .get(distance)
        .copied()
        .unwrap_or(RoundLabel::Numbered(number))
}

/// Pair entrants two at a time in order; a trailing odd entrant gets a bye.
fn pair_entrants<'a>(entrants: &[&'a Participant]) -> Vec<BracketMatch<'a>> {
    entrants
        .chunks(2)
        .map(|pair| BracketMatch::new(pair[0], pair.get(1).copied()))
        .collect()
}

/// Build the bracket: sort by registration time (stable), then pair and advance round by round.
/// Returns no rounds for an empty list.
pub fn generate_bracket(participants: &[Participant]) -> Vec<Round<'_>> {
    let total_rounds = round_count(participants.len());
    let mut entrants: Vec<&Participant> = participants.iter().collect();
    entrants.sort_by_key(|p| p.registered_at);

    let mut rounds = Vec::with_capacity(total_rounds);
    for number in 1..=total_rounds {
        let round = Round {
            number,
            label: round_label(number, total_rounds),
            matches: pair_entrants(&entrants),
        };
        entrants = round.winners();
        rounds.push(round);
    }
    rounds
}
