//! Opaque identifier - short alphanumeric token identifying users, rooms,
//! messages and polls
//!
//! Tokens are generated from a process-wide monotonic sequence combined
//! with random noise, so collisions cannot occur within one process.
//! Callers still must not assume global uniqueness across processes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Opaque identifier newtype (lowercase base-36 token)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpaqueId(String);

impl OpaqueId {
    /// Wrap an existing token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the token as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OpaqueId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Thread-safe identifier generator
///
/// Combines a monotonic sequence number with 32 bits of random noise and
/// encodes the result in base 36. The sequence guarantees per-process
/// uniqueness; the noise keeps tokens unguessable.
#[derive(Debug, Default)]
pub struct IdGenerator {
    sequence: AtomicU64,
}

impl IdGenerator {
    /// Create a new generator starting at sequence 0
    pub fn new() -> Self {
        Self {
            sequence: AtomicU64::new(0),
        }
    }

    /// Generate a fresh identifier
    pub fn generate(&self) -> OpaqueId {
        use rand::Rng;

        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let noise: u32 = rand::thread_rng().gen();
        let raw = (u128::from(seq) << 32) | u128::from(noise);
        OpaqueId(encode_base36(raw))
    }
}

/// Encode a number as a lowercase base-36 string
fn encode_base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
