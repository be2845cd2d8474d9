//! Cashfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the Cashfolio ledger:
//! accounts, ledger entries, derived positions, and aggregate reporting.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod accounts;
pub mod constants;
pub mod entries;
pub mod errors;
pub mod holdings;
pub mod ledger;
pub mod reporting;

// Re-export common types
pub use entries::*;
pub use ledger::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
