//! Session layer error types
//!
//! Every command failure is a typed error, never a panic: precondition
//! violations (wrong role, banned, silenced, unknown reference) and
//! domain-rule violations both land here. The caller decides how to
//! surface them; `is_blocked` marks the class a UI would render as a
//! generic "blocked" notice.

use chrono::{DateTime, Utc};
use thiserror::Error;

use classroom_core::{DomainError, OpaqueId};

/// Session layer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("No room is currently active")]
    NoActiveRoom,

    #[error("Only teachers may perform this action")]
    NotTeacher,

    #[error("User is banned")]
    Banned,

    #[error("User is silenced until {until}")]
    Silenced { until: DateTime<Utc> },

    #[error("No room matches code {0:?}")]
    RoomNotFound(String),

    #[error("Message not found: {0}")]
    MessageNotFound(OpaqueId),

    #[error("Poll not found: {0}")]
    PollNotFound(OpaqueId),

    #[error("User {0} is not a participant of this room")]
    ParticipantNotFound(OpaqueId),

    #[error("Message content was flagged by the content filter")]
    ContentFlagged,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SessionError {
    /// Get an error code string for caller-facing messaging
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::NoActiveRoom => "NO_ACTIVE_ROOM",
            Self::NotTeacher => "NOT_TEACHER",
            Self::Banned => "USER_BANNED",
            Self::Silenced { .. } => "USER_SILENCED",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::PollNotFound(_) => "UNKNOWN_POLL",
            Self::ParticipantNotFound(_) => "UNKNOWN_PARTICIPANT",
            Self::ContentFlagged => "CONTENT_FLAGGED",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a moderation block (banned, silenced, filtered)
    pub fn is_blocked(&self) -> bool {
        matches!(
            self,
            Self::Banned | Self::Silenced { .. } | Self::ContentFlagged
        )
    }

    /// Check if this is an unknown-reference failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RoomNotFound(_)
                | Self::MessageNotFound(_)
                | Self::PollNotFound(_)
                | Self::ParticipantNotFound(_)
        )
    }
}

/// Result type for session commands
pub type SessionResult<T> = Result<T, SessionError>;
