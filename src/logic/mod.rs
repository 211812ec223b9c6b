//! Bracket business logic and roster input.

mod bracket;
mod roster;

pub use bracket::{generate_bracket, round_count, round_label};
pub use roster::{approved_participants, load_roster, read_roster, RosterError};
