//! Ballot registry core — who may vote, who stands, and who won.
//!
//! The registry is a strictly serialized state machine over three pieces
//! of state: the voter roll, per-area candidate rolls, and the election
//! phase. Callers (a UI, an RPC layer, a test harness) invoke operations
//! synchronously and receive either a success payload or one
//! [`RegistryError`]; a rejected operation never leaves partial effects.
//!
//! ## Module overview
//!
//! - [`registry`] — the [`Registry`] state machine and its operations.
//! - [`config`] — administrator identity and policy flags, TOML-loadable.
//! - [`tally`] — per-area winner resolution with structured ties.
//! - [`voter`] / [`candidate`] — the two record types.
//! - [`error`] — the operation error taxonomy.

pub mod candidate;
pub mod config;
pub mod error;
pub mod registry;
pub mod tally;
pub mod voter;

pub use candidate::Candidate;
pub use config::{ConfigError, RegistryConfig};
pub use error::RegistryError;
pub use registry::Registry;
pub use tally::AreaResult;
pub use voter::Voter;
