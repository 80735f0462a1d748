use serde::{Deserialize, Serialize};

/// Number of cheats a session gets unless configured otherwise.
pub const DEFAULT_CHEATS_ALLOWED: u32 = 3;

/// Limited allowance of answer reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatQuota {
    allowed: u32,
    used: u32,
}

impl Default for CheatQuota {
    fn default() -> Self {
        Self::new(DEFAULT_CHEATS_ALLOWED)
    }
}

impl CheatQuota {
    #[must_use]
    pub fn new(allowed: u32) -> Self {
        Self { allowed, used: 0 }
    }

    /// Rebuild a quota from a saved count, clamped to `allowed`.
    #[must_use]
    pub fn restore(allowed: u32, used: u32) -> Self {
        Self {
            allowed,
            used: used.min(allowed),
        }
    }

    #[must_use]
    pub fn allowed(&self) -> u32 {
        self.allowed
    }

    #[must_use]
    pub fn used(&self) -> u32 {
        self.used
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.allowed.saturating_sub(self.used)
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.allowed
    }

    /// Count one cheat. Returns `true` when this use spent the last one.
    ///
    /// A no-op once exhausted, so `used` never exceeds `allowed`.
    pub fn consume(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.used += 1;
        self.is_exhausted()
    }
}

/// Input to the cheat sub-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatRequest {
    pub answer_is_true: bool,
}

/// Result of a completed cheat sub-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatResponse {
    pub answer_shown: bool,
}
