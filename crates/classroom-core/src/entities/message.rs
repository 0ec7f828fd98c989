//! Message entity - represents a chat message with its reactions

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::value_objects::OpaqueId;

/// Message entity
///
/// Author id and display name are a denormalized snapshot taken at send
/// time; messages are never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: OpaqueId,
    pub content: String,
    pub author_id: OpaqueId,
    pub author_name: String,
    pub timestamp: DateTime<Utc>,
    /// Emoji symbol -> reacting user ids (set semantics, order irrelevant)
    pub reactions: HashMap<String, Vec<OpaqueId>>,
}

impl Message {
    /// Create a new Message authored by the given user
    pub fn new(id: OpaqueId, author: &User, content: String) -> Self {
        Self {
            id,
            content,
            author_id: author.id.clone(),
            author_name: author.display_name.clone(),
            timestamp: Utc::now(),
            reactions: HashMap::new(),
        }
    }

    /// Toggle a user's reaction for an emoji
    ///
    /// Removes the user if present, adds them otherwise; an emptied
    /// reactor set drops the emoji key. Returns true if the reaction is
    /// present after the toggle. Applying twice restores the prior state.
    pub fn toggle_reaction(&mut self, emoji: &str, user_id: &OpaqueId) -> bool {
        let reactors = self.reactions.entry(emoji.to_string()).or_default();
        if let Some(pos) = reactors.iter().position(|id| id == user_id) {
            reactors.remove(pos);
            if reactors.is_empty() {
                self.reactions.remove(emoji);
            }
            false
        } else {
            reactors.push(user_id.clone());
            true
        }
    }

    /// Check if a user has reacted with an emoji
    pub fn has_reacted(&self, emoji: &str, user_id: &OpaqueId) -> bool {
        self.reactions
            .get(emoji)
            .is_some_and(|reactors| reactors.contains(user_id))
    }

    /// Number of reactions for an emoji
    pub fn reaction_count(&self, emoji: &str) -> usize {
        self.reactions.get(emoji).map_or(0, Vec::len)
    }
}
