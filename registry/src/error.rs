use ballot_types::{AccountId, Area, ElectionPhase};
use thiserror::Error;

/// Everything a registry operation can reject with.
///
/// Every failed precondition rejects the whole operation with no state
/// change; the registry remains valid and keeps accepting calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("caller {0} is not the administrator")]
    Unauthorized(AccountId),

    #[error("{0} is already registered")]
    AlreadyRegistered(String),

    #[error("operation requires phase {expected}, but the election is {actual}")]
    InvalidPhaseTransition {
        expected: ElectionPhase,
        actual: ElectionPhase,
    },

    #[error("voting is not open (election is {0})")]
    VotingNotOpen(ElectionPhase),

    #[error("voting is not closed (election is {0})")]
    VotingNotClosed(ElectionPhase),

    #[error("account {0} is not a registered voter")]
    NotRegistered(AccountId),

    #[error("national ID does not match the record registered for {0}")]
    IdentityMismatch(AccountId),

    #[error("voter {0} has already cast a ballot")]
    AlreadyVoted(AccountId),

    #[error("candidate index {index} is out of range for area {area} ({count} candidates)")]
    InvalidCandidateIndex {
        index: usize,
        area: Area,
        count: usize,
    },

    #[error("no candidates registered in area {0}")]
    AreaNotFound(Area),
}
