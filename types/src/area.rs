//! Voting area name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic/administrative partition.
///
/// Voters and candidates belong to exactly one area, assigned at
/// registration and immutable thereafter. Candidate lookup and tallying
/// are always scoped to a single area. Names are case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area(String);

impl Area {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Area {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Area {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
