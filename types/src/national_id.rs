//! National identity string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A national identity string, as printed on the voter's or candidate's
/// identity document.
///
/// Stored exactly as supplied — no normalization, no case folding. The
/// identity check at cast time is a verbatim comparison against this
/// value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalId(String);

impl NationalId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NationalId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for NationalId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
