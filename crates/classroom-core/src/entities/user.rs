//! User entity - represents a classroom participant
//!
//! Users are created at login and never deleted within a session. Rooms
//! hold copy-by-value snapshots of their participants, so moderation
//! applied inside a room mutates the room's copy, not the session-level
//! object (the two violation counters are deliberately independent).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::OpaqueId;

/// Participant role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: OpaqueId,
    pub role: Role,
    /// Generated pseudonym for students, chosen name for teachers
    pub display_name: String,
    /// Only ever increases; never reset by any command
    pub violations: u32,
    pub silenced_until: Option<DateTime<Utc>>,
    pub banned: bool,
}

impl User {
    /// Create a student with a generated pseudonym
    pub fn new_student(id: OpaqueId, pseudonym: String) -> Self {
        Self {
            id,
            role: Role::Student,
            display_name: pseudonym,
            violations: 0,
            silenced_until: None,
            banned: false,
        }
    }

    /// Create a teacher with a chosen display name (must not be blank)
    pub fn new_teacher(id: OpaqueId, name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::BlankDisplayName);
        }
        Ok(Self {
            id,
            role: Role::Teacher,
            display_name: name.to_string(),
            violations: 0,
            silenced_until: None,
            banned: false,
        })
    }

    /// Check if user is a teacher
    #[inline]
    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }

    /// Check if user is banned
    #[inline]
    pub fn is_banned(&self) -> bool {
        self.banned
    }

    /// Check if a silence is in effect at the given instant
    ///
    /// Lazy expiry: the flag is never cleared, staleness is computed here.
    pub fn is_silenced_at(&self, now: DateTime<Utc>) -> bool {
        self.silenced_until.is_some_and(|until| now < until)
    }

    /// Record one violation and return the updated count
    pub fn record_violation(&mut self) -> u32 {
        self.violations += 1;
        self.violations
    }

    /// Set the silence expiry timestamp
    pub fn silence_until(&mut self, until: DateTime<Utc>) {
        self.silenced_until = Some(until);
    }

    /// Set the banned flag (one-way within a session; no unban exists)
    pub fn ban(&mut self) {
        self.banned = true;
    }

    /// Single-character label shown in participant lists
    ///
    /// First character of the display name, or "T" when absent.
    pub fn initial(&self) -> char {
        self.display_name.chars().next().unwrap_or('T')
    }
}
