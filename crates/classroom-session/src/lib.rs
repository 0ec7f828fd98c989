//! # classroom-session
//!
//! Application layer for the anonymous classroom Q&A tool. The
//! [`SessionStore`] holds the shared in-memory state (rooms plus the
//! moderation engine) and exposes the command set a presentation layer
//! drives through per-client [`Session`] contexts: login, room
//! lifecycle, message admission, reactions, polls, and teacher
//! moderation (silencing with auto-ban escalation).
//!
//! Everything lives in memory and is lost when the process ends; there is
//! deliberately no persistence, network boundary, or credential scheme.

pub mod error;
pub mod moderation;
pub mod session;
pub mod store;

pub use error::{SessionError, SessionResult};
pub use moderation::ModerationPolicy;
pub use session::Session;
pub use store::SessionStore;
