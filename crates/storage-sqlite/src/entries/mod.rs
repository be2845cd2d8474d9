//! Ledger-entry storage: database model and repository.

mod model;
mod repository;

pub use model::EntryDB;
pub use repository::EntryRepository;
