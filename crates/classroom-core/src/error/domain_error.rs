//! Domain errors - rule violations raised by the entities themselves

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Display name must not be blank")]
    BlankDisplayName,

    #[error("Poll question must not be blank")]
    BlankPollQuestion,

    #[error("Poll needs at least {min} non-blank options")]
    NotEnoughPollOptions { min: usize },

    #[error("Poll has no option named {0:?}")]
    UnknownPollOption(String),

    #[error("Poll is closed")]
    PollClosed,
}

impl DomainError {
    /// Get an error code string for caller-facing messaging
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlankDisplayName => "BLANK_DISPLAY_NAME",
            Self::BlankPollQuestion => "BLANK_POLL_QUESTION",
            Self::NotEnoughPollOptions { .. } => "NOT_ENOUGH_POLL_OPTIONS",
            Self::UnknownPollOption(_) => "UNKNOWN_POLL_OPTION",
            Self::PollClosed => "POLL_CLOSED",
        }
    }

    /// Check if this is an input validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::BlankDisplayName
                | Self::BlankPollQuestion
                | Self::NotEnoughPollOptions { .. }
                | Self::UnknownPollOption(_)
        )
    }
}
