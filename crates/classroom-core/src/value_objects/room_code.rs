//! Room join code - short human-readable code students type to join a room

use std::fmt;

use serde::{Deserialize, Serialize};

/// 6-character uppercase alphanumeric join code
///
/// Intended unique among active rooms but not enforced by construction;
/// the keyspace (36^6) makes collisions unlikely at classroom scale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Code length in characters
    pub const LEN: usize = 6;

    /// Generate a fresh random join code
    pub fn generate() -> Self {
        use rand::Rng;

        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

        let mut rng = rand::thread_rng();
        let code = (0..Self::LEN)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();
        Self(code)
    }

    /// Get the code as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against user-entered text (trimmed, case-insensitive)
    pub fn matches(&self, entered: &str) -> bool {
        self.0.eq_ignore_ascii_case(entered.trim())
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
