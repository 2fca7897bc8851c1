//! Fundamental types for the ballot registry.
//!
//! This crate defines the identity and lifecycle types shared across the
//! workspace: account, national-ID and area identifiers, and the election
//! phase enum.

pub mod account;
pub mod area;
pub mod national_id;
pub mod phase;

pub use account::AccountId;
pub use area::Area;
pub use national_id::NationalId;
pub use phase::ElectionPhase;
