//! Entry repository and service traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::entries_model::{Entry, LedgerCommand, NewEntry, Receipt};
use crate::errors::Result;

/// Trait defining the contract for the ledger store.
///
/// Implementations handle persistence of entries and the account's cached
/// cash balance. The `*_with_cash_delta` operations are the store's atomic
/// multi-write primitives: the entry write and the balance update happen in
/// one transaction or not at all.
#[async_trait]
pub trait EntryRepositoryTrait: Send + Sync {
    /// Retrieves a single entry by its ID.
    fn get_entry(&self, entry_id: &str) -> Result<Entry>;

    /// Retrieves all entries for an account, ordered by entry date ascending.
    fn get_entries_by_account_id(&self, account_id: &str) -> Result<Vec<Entry>>;

    /// Retrieves entries for an account with `entry_date >= lower_bound`,
    /// ordered ascending. `None` imposes no lower bound.
    fn get_entries_since(
        &self,
        account_id: &str,
        lower_bound: Option<DateTime<Utc>>,
    ) -> Result<Vec<Entry>>;

    /// Retrieves trade entries for an account, optionally restricted to one
    /// symbol, ordered by entry date ascending.
    fn get_trade_entries(&self, account_id: &str, symbol: Option<&str>) -> Result<Vec<Entry>>;

    /// Atomically appends `new_entry` and adjusts the account's cash balance
    /// by `cash_delta`. Returns the persisted entry and the resulting balance.
    async fn insert_with_cash_delta(
        &self,
        new_entry: NewEntry,
        cash_delta: Decimal,
    ) -> Result<(Entry, Decimal)>;

    /// Atomically deletes the entry and adjusts the account's cash balance
    /// by `cash_delta`. Returns the resulting balance.
    async fn delete_with_cash_delta(&self, entry_id: &str, cash_delta: Decimal) -> Result<Decimal>;
}

/// Trait defining the contract for the entry service (the balance engine).
#[async_trait]
pub trait EntryServiceTrait: Send + Sync {
    /// Validates and applies a state-changing command against the account.
    async fn apply(&self, account_id: &str, command: LedgerCommand) -> Result<Receipt>;

    /// Reverses a cash-flow entry: deletes it and applies the inverse cash
    /// delta. Trades are immutable and cannot be deleted.
    async fn delete_entry(&self, account_id: &str, entry_id: &str) -> Result<Receipt>;

    /// Retrieves all entries for an account, ordered by entry date ascending.
    fn get_entries_by_account_id(&self, account_id: &str) -> Result<Vec<Entry>>;
}
