//! Domain entities

mod message;
mod poll;
mod room;
mod user;

pub use message::Message;
pub use poll::{Poll, MIN_POLL_OPTIONS};
pub use room::Room;
pub use user::{Role, User};
