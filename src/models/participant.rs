//! Participant and RegistrationStatus data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant.
pub type ParticipantId = Uuid;

/// Where a sign-up stands in the admin review.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A registered participant. Never mutated once read; bracket matches borrow it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Generated when absent from the input.
    #[serde(default = "Uuid::new_v4")]
    pub id: ParticipantId,
    /// Display name shown in the bracket.
    pub name: String,
    /// Avatar image reference (URL or static path).
    #[serde(default)]
    pub avatar: Option<String>,
    pub registered_at: DateTime<Utc>,
    #[serde(default)]
    pub status: RegistrationStatus,
}

impl Participant {
    /// Create a pending participant with a fresh id and no avatar.
    pub fn new(name: impl Into<String>, registered_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            avatar: None,
            registered_at,
            status: RegistrationStatus::Pending,
        }
    }

    pub fn with_avatar(self, avatar: impl Into<String>) -> Self {
        Self {
            avatar: Some(avatar.into()),
            ..self
        }
    }

    pub fn with_status(self, status: RegistrationStatus) -> Self {
        Self { status, ..self }
    }

    pub fn is_approved(&self) -> bool {
        self.status == RegistrationStatus::Approved
    }
}
