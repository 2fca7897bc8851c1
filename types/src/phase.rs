//! Election lifecycle phase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle stage of the election, held process-wide by the registry.
///
/// Transitions are strictly forward: `NotStarted → Open → Closed`. There
/// is no reversal and no wraparound; `Closed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectionPhase {
    /// Registration window; no ballots accepted yet.
    NotStarted,
    /// Ballots are being accepted.
    Open,
    /// Voting has ended. Terminal state.
    Closed,
}

impl ElectionPhase {
    /// Whether ballots may be cast in this phase.
    pub fn accepts_ballots(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether voter/candidate registration is accepted in this phase.
    ///
    /// Registration is normally confined to the pre-voting window;
    /// `allow_after_start` is the legacy opt-out that accepts it in any
    /// phase.
    pub fn accepts_registrations(&self, allow_after_start: bool) -> bool {
        allow_after_start || matches!(self, Self::NotStarted)
    }

    /// Whether this phase is terminal.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for ElectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not-started",
            Self::Open => "open",
            Self::Closed => "closed",
        };
        write!(f, "{name}")
    }
}
