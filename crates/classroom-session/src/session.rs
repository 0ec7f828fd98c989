//! Session context - one client's view of the shared store
//!
//! Replaces the original single pair of global current-user/current-room
//! pointers with an explicit per-client context, so several sessions can
//! drive one [`SessionStore`](crate::SessionStore) without hidden
//! coupling (a teacher tab and a student tab, say).

use tracing::{debug, info};

use classroom_core::{OpaqueId, User};

/// Per-client session state: who is logged in, which room is active
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) current_user: Option<User>,
    pub(crate) current_room_id: Option<OpaqueId>,
}

impl Session {
    /// Create an empty session (nobody logged in, no active room)
    pub fn new() -> Self {
        Self::default()
    }

    /// The logged-in user, if any
    ///
    /// This is the session-level copy: room-scoped moderation mutates the
    /// room's participant snapshot, never this object.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Id of the active room, if any
    pub fn current_room_id(&self) -> Option<&OpaqueId> {
        self.current_room_id.as_ref()
    }

    /// Clear the current user and room; stored rooms are untouched
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(user_id = %user.id, "User logged out");
        }
        self.current_room_id = None;
    }

    /// Clear the active-room pointer; membership in the room is retained
    pub fn leave_room(&mut self) {
        if let Some(room_id) = self.current_room_id.take() {
            debug!(room_id = %room_id, "Left room");
        }
    }
}
