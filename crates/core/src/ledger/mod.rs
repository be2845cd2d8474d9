//! Ledger facade - the operation surface consumed by callers.

mod ledger_service;


pub use ledger_service::LedgerService;
