//! Roster input: CSV loading and the approved-only filter applied before bracket generation.

use crate::models::{Participant, RegistrationStatus};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use uuid::Uuid;

/// Errors that can occur while reading a roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Roster file could not be opened or read.
    Io(String),
    /// Malformed CSV record (bad header, timestamp, status, ...).
    Csv(String),
    /// A record has a blank name. `line` is the 1-indexed line in the file.
    EmptyName { line: u64 },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Io(msg) => write!(f, "Could not read roster: {}", msg),
            RosterError::Csv(msg) => write!(f, "Invalid roster record: {}", msg),
            RosterError::EmptyName { line } => write!(f, "Participant on line {} has no name", line),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        RosterError::Io(e.to_string())
    }
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e.to_string())
    }
}

/// One CSV row: `id,name,avatar,registered_at,status`.
#[derive(Deserialize)]
struct RosterRecord {
    id: Uuid,
    name: String,
    avatar: Option<String>,
    registered_at: DateTime<Utc>,
    status: RegistrationStatus,
}

/// Parse a roster from any reader. Names are trimmed; an empty avatar column means no avatar.
pub fn read_roster(reader: impl Read) -> Result<Vec<Participant>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut participants = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let record: RosterRecord = row.deserialize(Some(&headers))?;
        if record.name.is_empty() {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            return Err(RosterError::EmptyName { line });
        }
        participants.push(Participant {
            id: record.id,
            name: record.name,
            avatar: record.avatar.filter(|a| !a.is_empty()),
            registered_at: record.registered_at,
            status: record.status,
        });
    }
    Ok(participants)
}

/// Load a roster CSV from disk.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Participant>, RosterError> {
    let file = File::open(path)?;
    read_roster(file)
}

/// Keep only approved participants, preserving their order.
pub fn approved_participants(roster: Vec<Participant>) -> Vec<Participant> {
    roster.into_iter().filter(Participant::is_approved).collect()
}
