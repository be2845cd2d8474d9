//! Cashfolio Market Data Crate
//!
//! Provider-agnostic quote lookup for the Cashfolio ledger.
//!
//! The crate exposes one capability: given a symbol, return the latest known
//! `{ symbol, name, price }` or a "not found" error. No caching or staleness
//! guarantees are made beyond "latest known price"; callers that need
//! graceful degradation handle provider errors themselves.
//!
//! # Core Types
//!
//! - [`Quote`] - A current market quote for one symbol
//! - [`QuoteProvider`] - Trait implemented by every quote source
//! - [`YahooProvider`] - Yahoo Finance implementation
//! - [`MarketDataError`] - Errors a provider can report

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::{QuoteProvider, YahooProvider};
