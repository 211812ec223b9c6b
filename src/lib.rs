//! Tournament bracket: participant models, bracket generation, roster loading and HTML rendering.

pub mod api;
pub mod logic;
pub mod models;
pub mod render;

pub use logic::{
    approved_participants, generate_bracket, load_roster, read_roster, round_count, round_label,
    RosterError,
};
pub use models::{BracketMatch, Participant, ParticipantId, RegistrationStatus, Round, RoundLabel};
pub use render::{render_bracket, render_error_page, render_page, EMPTY_BRACKET_HTML};
