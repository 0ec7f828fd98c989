//! Poll entity - a teacher question with single-choice voting

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::OpaqueId;

/// Minimum number of non-blank options a poll must offer
pub const MIN_POLL_OPTIONS: usize = 2;

/// Poll entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: OpaqueId,
    pub question: String,
    /// Ordered option list as presented to voters
    pub options: Vec<String>,
    /// Option -> voter ids; a voter appears under at most one option
    pub votes: HashMap<String, Vec<OpaqueId>>,
    pub created_by: OpaqueId,
    pub active: bool,
}

impl Poll {
    /// Create a new active Poll
    ///
    /// Options are trimmed and blank ones discarded; requires a non-blank
    /// question and at least [`MIN_POLL_OPTIONS`] surviving options.
    pub fn new(
        id: OpaqueId,
        created_by: OpaqueId,
        question: &str,
        options: &[String],
    ) -> Result<Self, DomainError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::BlankPollQuestion);
        }

        let options: Vec<String> = options
            .iter()
            .map(|opt| opt.trim().to_string())
            .filter(|opt| !opt.is_empty())
            .collect();
        if options.len() < MIN_POLL_OPTIONS {
            return Err(DomainError::NotEnoughPollOptions {
                min: MIN_POLL_OPTIONS,
            });
        }

        Ok(Self {
            id,
            question: question.to_string(),
            options,
            votes: HashMap::new(),
            created_by,
            active: true,
        })
    }

    /// Check if the poll still accepts votes
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Close the poll (one-way transition)
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Cast or move a user's vote to the given option
    ///
    /// Single-choice: the user is removed from every other option's voter
    /// set before being added. Emptied sets drop their option key.
    pub fn cast_vote(&mut self, option: &str, voter_id: &OpaqueId) -> Result<(), DomainError> {
        if !self.active {
            return Err(DomainError::PollClosed);
        }
        if !self.options.iter().any(|opt| opt == option) {
            return Err(DomainError::UnknownPollOption(option.to_string()));
        }

        self.votes.retain(|_, voters| {
            voters.retain(|id| id != voter_id);
            !voters.is_empty()
        });
        self.votes
            .entry(option.to_string())
            .or_default()
            .push(voter_id.clone());
        Ok(())
    }

    /// Number of votes for an option
    pub fn votes_for(&self, option: &str) -> usize {
        self.votes.get(option).map_or(0, Vec::len)
    }

    /// The option a user voted for, if any
    pub fn choice_of(&self, voter_id: &OpaqueId) -> Option<&str> {
        self.votes
            .iter()
            .find(|(_, voters)| voters.contains(voter_id))
            .map(|(option, _)| option.as_str())
    }

    /// Total number of votes cast
    pub fn total_votes(&self) -> usize {
        self.votes.values().map(Vec::len).sum()
    }
}
