//! Data structures: participants and the rounds/matches of a bracket.

mod bracket;
mod participant;

pub use bracket::{BracketMatch, Round, RoundLabel};
pub use participant::{Participant, ParticipantId, RegistrationStatus};
