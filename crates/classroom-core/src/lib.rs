//! # classroom-core
//!
//! Domain layer for the anonymous classroom Q&A tool: entities, value
//! objects, the content filter, and domain errors. This crate has zero
//! dependencies on infrastructure; all state is plain in-memory data.

pub mod entities;
pub mod error;
pub mod filter;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Message, Poll, Role, Room, User, MIN_POLL_OPTIONS};
pub use error::DomainError;
pub use filter::ContentFilter;
pub use value_objects::{generate_pseudonym, IdGenerator, OpaqueId, RoomCode};
