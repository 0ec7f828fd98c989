//! Value objects - identifiers, join codes, and pseudonyms

mod opaque_id;
mod pseudonym;
mod room_code;

pub use opaque_id::{IdGenerator, OpaqueId};
pub use pseudonym::generate_pseudonym;
pub use room_code::RoomCode;
