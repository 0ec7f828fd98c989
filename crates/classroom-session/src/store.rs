//! Session store - shared room registry and the command surface
//!
//! Holds every room created so far plus the moderation engine (content
//! filter and escalation policy). Commands are driven through a
//! [`Session`] context, one per client; all mutation goes through
//! `&mut self`, so within one store commands serialize and each command's
//! effect is observable only in full. The one sanctioned failure side
//! effect is the profanity violation increment in [`send_message`].
//!
//! [`send_message`]: SessionStore::send_message

use chrono::{Duration, Utc};
use tracing::{debug, info, instrument, warn};

use classroom_core::{
    generate_pseudonym, ContentFilter, IdGenerator, Message, OpaqueId, Poll, Role, Room, RoomCode,
    User,
};

use crate::error::{SessionError, SessionResult};
use crate::moderation::ModerationPolicy;
use crate::session::Session;

/// Shared in-memory state: rooms, id generation, and moderation rules
#[derive(Debug, Default)]
pub struct SessionStore {
    filter: ContentFilter,
    policy: ModerationPolicy,
    ids: IdGenerator,
    rooms: Vec<Room>,
}

impl SessionStore {
    /// Create a store with the default filter and moderation policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the moderation policy
    pub fn with_policy(mut self, policy: ModerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the content filter
    pub fn with_filter(mut self, filter: ContentFilter) -> Self {
        self.filter = filter;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All rooms created so far (rooms are never deleted)
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Resolve a session's active-room pointer to the owned aggregate
    pub fn current_room(&self, session: &Session) -> Option<&Room> {
        session
            .current_room_id
            .as_ref()
            .and_then(|id| self.room(id))
    }

    fn room(&self, room_id: &OpaqueId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == *room_id)
    }

    fn room_mut(&mut self, room_id: &OpaqueId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == *room_id)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Log in on a session, replacing any previously logged-in user
    ///
    /// Students get a generated pseudonym (`name` is ignored); teachers
    /// require a non-blank name. The session's active-room pointer is
    /// cleared: the new user has not joined anything yet.
    #[instrument(skip(self, session))]
    pub fn login<'s>(
        &self,
        session: &'s mut Session,
        role: Role,
        name: Option<&str>,
    ) -> SessionResult<&'s User> {
        let id = self.ids.generate();
        let user = match role {
            Role::Student => User::new_student(id, generate_pseudonym()),
            Role::Teacher => User::new_teacher(id, name.unwrap_or_default())?,
        };
        info!(user_id = %user.id, role = ?role, display_name = %user.display_name, "User logged in");
        session.current_room_id = None;
        Ok(session.current_user.insert(user))
    }

    /// Create a room owned by the session's teacher and make it active
    ///
    /// Returns the join code students use to enter.
    #[instrument(skip(self, session))]
    pub fn create_room(&mut self, session: &mut Session, name: &str) -> SessionResult<RoomCode> {
        let teacher = session.current_user().ok_or(SessionError::NotLoggedIn)?;
        if !teacher.is_teacher() {
            return Err(SessionError::NotTeacher);
        }

        let id = self.ids.generate();
        let code = RoomCode::generate();
        let room = Room::new(id.clone(), code.clone(), name.trim().to_string(), teacher);
        info!(room_id = %id, code = %code, teacher_id = %room.teacher_id, "Room created");

        self.rooms.push(room);
        session.current_room_id = Some(id);
        Ok(code)
    }

    /// Join a room by its code and make it the session's active room
    ///
    /// Fails for banned users, including users whose stored participant
    /// snapshot in that room carries a ban. Rejoining is idempotent: the
    /// stored snapshot (with its moderation state) is kept.
    #[instrument(skip(self, session))]
    pub fn join_room(&mut self, session: &mut Session, code: &str) -> SessionResult<()> {
        let user = session.current_user().ok_or(SessionError::NotLoggedIn)?;
        if user.is_banned() {
            return Err(SessionError::Banned);
        }
        let user = user.clone();

        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.code.matches(code))
            .ok_or_else(|| SessionError::RoomNotFound(code.trim().to_uppercase()))?;
        if room.participant(&user.id).is_some_and(User::is_banned) {
            return Err(SessionError::Banned);
        }

        let room_id = room.id.clone();
        let added = room.add_participant(user.clone());
        info!(user_id = %user.id, room_id = %room_id, rejoined = !added, "User joined room");
        session.current_room_id = Some(room_id);
        Ok(())
    }

    /// Send a message to the session's active room
    ///
    /// Admission is gated by the moderation engine: banned or silenced
    /// users are rejected (the room's participant snapshot and the session
    /// user are both consulted), and flagged content fails with
    /// [`SessionError::ContentFlagged`] after incrementing the session
    /// user's violation count. Returns the new message's id.
    #[instrument(skip(self, session, content))]
    pub fn send_message(&mut self, session: &mut Session, content: &str) -> SessionResult<OpaqueId> {
        let user = session.current_user().ok_or(SessionError::NotLoggedIn)?;
        if user.is_banned() {
            return Err(SessionError::Banned);
        }
        let author = user.clone();
        let room_id = session
            .current_room_id
            .clone()
            .ok_or(SessionError::NoActiveRoom)?;
        let now = Utc::now();

        let room = self.room(&room_id).ok_or(SessionError::NoActiveRoom)?;
        let snapshot = room.participant(&author.id);
        if snapshot.is_some_and(User::is_banned) {
            return Err(SessionError::Banned);
        }
        for subject in snapshot.into_iter().chain([&author]) {
            if let Some(until) = subject.silenced_until {
                if now < until {
                    return Err(SessionError::Silenced { until });
                }
            }
        }

        if self.filter.is_flagged(content) {
            // Profanity bumps the session-level violation count, which is
            // distinct from the room-scoped one silencing maintains
            if let Some(user) = session.current_user.as_mut() {
                let violations = user.record_violation();
                warn!(user_id = %author.id, violations, "Message blocked by content filter");
            }
            return Err(SessionError::ContentFlagged);
        }

        let message = Message::new(self.ids.generate(), &author, content.to_string());
        let message_id = message.id.clone();
        let room = self.room_mut(&room_id).ok_or(SessionError::NoActiveRoom)?;
        room.push_message(message);
        info!(user_id = %author.id, room_id = %room_id, message_id = %message_id, "Message sent");
        Ok(message_id)
    }

    /// Silence a participant of the active room for a number of minutes
    ///
    /// Teacher-only. Increments the target's room-scoped violation count
    /// and applies the auto-ban rule: count at threshold AND a silence of
    /// qualifying length sets the banned flag, permanently for the
    /// session. Moderation mutates the room's participant snapshot only;
    /// the target's own session object is untouched.
    #[instrument(skip(self, session))]
    pub fn silence_user(
        &mut self,
        session: &Session,
        target_id: &OpaqueId,
        duration_minutes: i64,
    ) -> SessionResult<()> {
        let actor = session.current_user().ok_or(SessionError::NotLoggedIn)?;
        if !actor.is_teacher() {
            return Err(SessionError::NotTeacher);
        }
        let room_id = session
            .current_room_id
            .clone()
            .ok_or(SessionError::NoActiveRoom)?;
        let policy = self.policy;
        let until = Utc::now() + Duration::minutes(duration_minutes);

        let room = self.room_mut(&room_id).ok_or(SessionError::NoActiveRoom)?;
        let target = room
            .participant_mut(target_id)
            .ok_or_else(|| SessionError::ParticipantNotFound(target_id.clone()))?;

        target.silence_until(until);
        let violations = target.record_violation();
        info!(
            user_id = %target_id,
            room_id = %room_id,
            violations,
            duration_minutes,
            "Participant silenced"
        );

        if policy.should_ban(violations, duration_minutes) {
            target.ban();
            warn!(user_id = %target_id, room_id = %room_id, violations, "Participant auto-banned");
        }
        Ok(())
    }

    /// Toggle the session user's reaction on a message in the active room
    #[instrument(skip(self, session))]
    pub fn add_reaction(
        &mut self,
        session: &Session,
        message_id: &OpaqueId,
        emoji: &str,
    ) -> SessionResult<()> {
        let user = session.current_user().ok_or(SessionError::NotLoggedIn)?;
        let user_id = user.id.clone();
        let room_id = session
            .current_room_id
            .clone()
            .ok_or(SessionError::NoActiveRoom)?;

        let room = self.room_mut(&room_id).ok_or(SessionError::NoActiveRoom)?;
        let message = room
            .message_mut(message_id)
            .ok_or_else(|| SessionError::MessageNotFound(message_id.clone()))?;
        let present = message.toggle_reaction(emoji, &user_id);
        debug!(user_id = %user_id, message_id = %message_id, emoji, present, "Reaction toggled");
        Ok(())
    }

    /// Create a poll in the active room
    ///
    /// Teacher-only; requires a non-blank question and at least two
    /// non-blank options after trimming. Returns the new poll's id.
    #[instrument(skip(self, session))]
    pub fn create_poll(
        &mut self,
        session: &Session,
        question: &str,
        options: &[String],
    ) -> SessionResult<OpaqueId> {
        let teacher = session.current_user().ok_or(SessionError::NotLoggedIn)?;
        if !teacher.is_teacher() {
            return Err(SessionError::NotTeacher);
        }
        let teacher_id = teacher.id.clone();
        let room_id = session
            .current_room_id
            .clone()
            .ok_or(SessionError::NoActiveRoom)?;

        let poll = Poll::new(self.ids.generate(), teacher_id, question, options)?;
        let poll_id = poll.id.clone();
        let room = self.room_mut(&room_id).ok_or(SessionError::NoActiveRoom)?;
        room.push_poll(poll);
        info!(poll_id = %poll_id, room_id = %room_id, "Poll created");
        Ok(poll_id)
    }

    /// Cast or move the session user's vote on a poll in the active room
    ///
    /// Single-choice: any previous vote by this user is withdrawn first.
    #[instrument(skip(self, session))]
    pub fn vote_poll(
        &mut self,
        session: &Session,
        poll_id: &OpaqueId,
        option: &str,
    ) -> SessionResult<()> {
        let user = session.current_user().ok_or(SessionError::NotLoggedIn)?;
        let user_id = user.id.clone();
        let room_id = session
            .current_room_id
            .clone()
            .ok_or(SessionError::NoActiveRoom)?;

        let room = self.room_mut(&room_id).ok_or(SessionError::NoActiveRoom)?;
        let poll = room
            .poll_mut(poll_id)
            .ok_or_else(|| SessionError::PollNotFound(poll_id.clone()))?;
        poll.cast_vote(option, &user_id)?;
        debug!(user_id = %user_id, poll_id = %poll_id, option, "Vote cast");
        Ok(())
    }

    /// Close a poll in the active room so it stops accepting votes
    ///
    /// Teacher-only, one-way transition; closing a closed poll fails.
    #[instrument(skip(self, session))]
    pub fn close_poll(&mut self, session: &Session, poll_id: &OpaqueId) -> SessionResult<()> {
        let teacher = session.current_user().ok_or(SessionError::NotLoggedIn)?;
        if !teacher.is_teacher() {
            return Err(SessionError::NotTeacher);
        }
        let room_id = session
            .current_room_id
            .clone()
            .ok_or(SessionError::NoActiveRoom)?;

        let room = self.room_mut(&room_id).ok_or(SessionError::NoActiveRoom)?;
        let poll = room
            .poll_mut(poll_id)
            .ok_or_else(|| SessionError::PollNotFound(poll_id.clone()))?;
        if !poll.is_active() {
            return Err(classroom_core::DomainError::PollClosed.into());
        }
        poll.close();
        info!(poll_id = %poll_id, room_id = %room_id, "Poll closed");
        Ok(())
    }
}
