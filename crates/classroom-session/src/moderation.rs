//! Moderation policy - the auto-ban escalation rule
//!
//! Silencing a participant always increments their room-scoped violation
//! count; the ban fires only when the count has reached the threshold AND
//! the silence just applied was long enough. Both knobs are injectable so
//! an embedding can tighten or relax the rule.

use serde::{Deserialize, Serialize};

/// Tunables for the auto-ban escalation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationPolicy {
    /// Violation count at which a qualifying silence triggers a ban
    pub auto_ban_violation_threshold: u32,
    /// Minimum silence duration (minutes) for the ban to fire
    pub auto_ban_min_silence_minutes: i64,
}

impl ModerationPolicy {
    /// Decide whether a silence of `duration_minutes` that brought the
    /// participant to `violations` should escalate to a ban
    pub fn should_ban(&self, violations: u32, duration_minutes: i64) -> bool {
        violations >= self.auto_ban_violation_threshold
            && duration_minutes >= self.auto_ban_min_silence_minutes
    }
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self {
            auto_ban_violation_threshold: 4,
            auto_ban_min_silence_minutes: 20,
        }
    }
}
