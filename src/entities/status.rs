//! Countdown status effects (thunder charges, freeze turns).

use serde::{Deserialize, Serialize};

/// A status that stays active while it has turns/charges left.
///
/// The active flag is derived from the counter, so "active iff remaining > 0"
/// holds by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounter {
    remaining: u32,
}

impl StatusCounter {
    /// An inactive status.
    #[must_use]
    pub const fn inactive() -> Self {
        Self { remaining: 0 }
    }

    /// Start (or restart) the status for `duration` turns.
    pub fn arm(&mut self, duration: u32) {
        self.remaining = duration;
    }

    /// Use up one turn/charge. Returns whether the status was active.
    pub fn consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        self.remaining > 0
    }

    #[must_use]
    pub const fn remaining(self) -> u32 {
        self.remaining
    }
}
