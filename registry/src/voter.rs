//! Voter record.

use ballot_types::{AccountId, Area, NationalId};
use serde::{Deserialize, Serialize};

/// A registered voter.
///
/// Created once at registration, never deleted. The only mutation over its
/// lifetime is the `has_voted` flip when a ballot is accepted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Voter {
    pub account: AccountId,
    /// National identity string, stored verbatim (case-sensitive).
    pub national_id: NationalId,
    /// Voting area assigned at registration, immutable thereafter.
    pub area: Area,
    /// True from creation; never reset.
    pub is_registered: bool,
    /// False until one successful ballot, then permanently true.
    pub has_voted: bool,
}

impl Voter {
    pub fn new(account: AccountId, national_id: NationalId, area: Area) -> Self {
        Self {
            account,
            national_id,
            area,
            is_registered: true,
            has_voted: false,
        }
    }
}
