//! Candidate record.

use ballot_types::{Area, NationalId};
use serde::{Deserialize, Serialize};

/// A candidate on an area's ballot.
///
/// Candidates are identified by their position in the area roll: 0-based,
/// assigned in registration order, append-only. That index is the public
/// handle voters use when casting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub national_id: NationalId,
    pub area: Area,
    /// Ballots received. Only incremented while voting is open.
    pub vote_count: u64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, national_id: NationalId, area: Area) -> Self {
        Self {
            name: name.into(),
            national_id,
            area,
            vote_count: 0,
        }
    }
}
