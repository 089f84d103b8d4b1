// SPDX-License-Identifier: MPL-2.0
//! Gesture cycle tokens.
//!
//! Every completed gesture opens a new cycle. Scheduled events carry the token
//! of the cycle that scheduled them, so an event from a superseded cycle can
//! be recognised and dropped on arrival.

use std::fmt;

/// Identity of one Idle → Feedback → Idle cycle.
///
/// Tokens are allocated by the swipe machine itself and increase
/// monotonically, so they never depend on global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CycleId(u64);

impl CycleId {
    /// Returns the token following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
