//! Registry configuration with TOML file support.

use ballot_types::AccountId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or parsing a registry configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Configuration for a ballot registry.
///
/// Constructed once at startup and handed to
/// [`Registry::new`](crate::Registry::new); there is no ambient global
/// state. Can be loaded from a TOML file via
/// [`RegistryConfig::from_toml_file`] or built programmatically (e.g. for
/// tests). Every policy flag defaults to the stricter behavior; the
/// looser legacy behavior is an explicit opt-out.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// The single administrator identity allowed to register entities and
    /// drive phase transitions.
    pub admin: AccountId,

    /// Accept voter/candidate registration after voting has started.
    ///
    /// Off by default: registration is confined to the pre-voting window.
    #[serde(default)]
    pub allow_registration_after_start: bool,

    /// Reject candidates whose national ID is already on a ballot.
    #[serde(default = "default_true")]
    pub enforce_candidate_id_uniqueness: bool,

    /// Only serve area results once voting has closed.
    #[serde(default = "default_true")]
    pub results_require_closed: bool,
}

fn default_true() -> bool {
    true
}

impl RegistryConfig {
    /// Strict defaults with the given administrator identity.
    pub fn new(admin: impl Into<AccountId>) -> Self {
        Self {
            admin: admin.into(),
            allow_registration_after_start: false,
            enforce_candidate_id_uniqueness: true,
            results_require_closed: true,
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("RegistryConfig is always serializable to TOML")
    }
}
