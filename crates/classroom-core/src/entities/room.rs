//! Room entity - a teacher-owned chat/poll space joined by code

use serde::{Deserialize, Serialize};

use crate::entities::{Message, Poll, User};
use crate::value_objects::{OpaqueId, RoomCode};

/// Room aggregate
///
/// Messages are append-only (insertion order = chronological order).
/// Participants are copy-by-value snapshots taken at join time, so
/// moderation applied here never touches the session-level user object.
/// Rooms persist until the process ends; there is no deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: OpaqueId,
    pub code: RoomCode,
    pub name: String,
    pub teacher_id: OpaqueId,
    pub messages: Vec<Message>,
    pub polls: Vec<Poll>,
    pub participants: Vec<User>,
}

impl Room {
    /// Create a new Room with the creating teacher as sole participant
    pub fn new(id: OpaqueId, code: RoomCode, name: String, teacher: &User) -> Self {
        Self {
            id,
            code,
            name,
            teacher_id: teacher.id.clone(),
            messages: Vec::new(),
            polls: Vec::new(),
            participants: vec![teacher.clone()],
        }
    }

    /// Check if a user owns this room
    #[inline]
    pub fn is_owner(&self, user_id: &OpaqueId) -> bool {
        self.teacher_id == *user_id
    }

    /// Look up a participant snapshot by id
    pub fn participant(&self, user_id: &OpaqueId) -> Option<&User> {
        self.participants.iter().find(|p| p.id == *user_id)
    }

    /// Look up a participant snapshot by id, mutably
    pub fn participant_mut(&mut self, user_id: &OpaqueId) -> Option<&mut User> {
        self.participants.iter_mut().find(|p| p.id == *user_id)
    }

    /// Add a participant snapshot unless one with the same id exists
    ///
    /// Rejoining keeps the stored snapshot (with any moderation state it
    /// carries) rather than replacing it. Returns true if added.
    pub fn add_participant(&mut self, user: User) -> bool {
        if self.participant(&user.id).is_some() {
            return false;
        }
        self.participants.push(user);
        true
    }

    /// Append a message (chronological order by construction)
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Add a poll
    pub fn push_poll(&mut self, poll: Poll) {
        self.polls.push(poll);
    }

    /// Look up a message by id, mutably
    pub fn message_mut(&mut self, message_id: &OpaqueId) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == *message_id)
    }

    /// Look up a poll by id
    pub fn poll(&self, poll_id: &OpaqueId) -> Option<&Poll> {
        self.polls.iter().find(|p| p.id == *poll_id)
    }

    /// Look up a poll by id, mutably
    pub fn poll_mut(&mut self, poll_id: &OpaqueId) -> Option<&mut Poll> {
        self.polls.iter_mut().find(|p| p.id == *poll_id)
    }

    /// Number of participants
    #[inline]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}
