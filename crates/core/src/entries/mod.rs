//! Ledger entries module - domain models, the balance engine, and traits.

mod entries_constants;
mod entries_errors;
mod entries_model;
mod entries_service;
mod entries_traits;

#[cfg(test)]
mod entries_model_tests;


pub use entries_constants::*;
pub use entries_errors::EntryError;
pub use entries_model::{
    Entry, EntryKind, FlowDirection, LedgerCommand, NewEntry, Receipt, TradeSide,
};
pub use entries_service::EntryService;
pub use entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
