use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::accounts::AccountRepositoryTrait;
use crate::entries::entries_constants::DEPOSIT_CATEGORY;
use crate::entries::entries_errors::EntryError;
use crate::entries::entries_model::{
    Entry, EntryKind, FlowDirection, LedgerCommand, NewEntry, Receipt, TradeSide,
};
use crate::entries::entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::holdings;
use cashfolio_market_data::QuoteProvider;

/// Service applying state-changing commands to the ledger.
///
/// The check-then-apply sequence runs under an exclusive per-account lock:
/// two concurrent writes on the same account can never both pass a solvency
/// or holdings check against state that only one of them will still hold.
pub struct EntryService {
    entry_repository: Arc<dyn EntryRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    quote_provider: Arc<dyn QuoteProvider>,
    account_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl EntryService {
    /// Creates a new EntryService instance with injected dependencies
    pub fn new(
        entry_repository: Arc<dyn EntryRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        quote_provider: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            entry_repository,
            account_repository,
            quote_provider,
            account_locks: DashMap::new(),
        }
    }

    fn account_lock(&self, account_id: &str) -> Arc<Mutex<()>> {
        self.account_locks
            .entry(account_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn apply_kind(&self, account_id: &str, kind: EntryKind) -> Result<Receipt> {
        let new_entry = NewEntry {
            id: Some(Uuid::new_v4().to_string()),
            account_id: account_id.to_string(),
            kind,
            entry_date: Utc::now(),
        };
        new_entry.validate().map_err(Error::Entry)?;

        let lock = self.account_lock(account_id);
        let _guard = lock.lock().await;

        let account = self.account_repository.get_by_id(account_id)?;

        match &new_entry.kind {
            EntryKind::Trade {
                quantity,
                unit_price,
                side: TradeSide::Buy,
                ..
            } => {
                let cost = Decimal::from(*quantity) * *unit_price;
                if cost > account.cash {
                    return Err(EntryError::InsufficientFunds {
                        required: cost,
                        available: account.cash,
                    }
                    .into());
                }
            }
            EntryKind::Trade {
                symbol,
                quantity,
                side: TradeSide::Sell,
                ..
            } => {
                let trades = self
                    .entry_repository
                    .get_trade_entries(account_id, Some(symbol))?;
                let held = holdings::net_position(&trades, symbol);
                if *quantity > held {
                    return Err(EntryError::InsufficientHoldings {
                        symbol: symbol.clone(),
                        requested: *quantity,
                        held,
                    }
                    .into());
                }
            }
            EntryKind::CashFlow {
                amount,
                direction: FlowDirection::Outflow,
                ..
            } => {
                if *amount > account.cash {
                    return Err(EntryError::InsufficientFunds {
                        required: *amount,
                        available: account.cash,
                    }
                    .into());
                }
            }
            EntryKind::CashFlow {
                direction: FlowDirection::Inflow,
                ..
            } => {}
        }

        let cash_delta = new_entry.cash_delta();
        let (entry, balance) = self
            .entry_repository
            .insert_with_cash_delta(new_entry, cash_delta)
            .await?;

        debug!(
            "Applied entry {} to account {}, new balance {}",
            entry.id, account_id, balance
        );

        Ok(Receipt {
            entry_id: entry.id,
            balance,
        })
    }
}

#[async_trait]
impl EntryServiceTrait for EntryService {
    async fn apply(&self, account_id: &str, command: LedgerCommand) -> Result<Receipt> {
        let kind = match command {
            LedgerCommand::PlaceTrade {
                symbol,
                quantity,
                side,
            } => {
                if symbol.trim().is_empty() {
                    return Err(EntryError::InvalidData("Symbol cannot be empty".to_string()).into());
                }
                if quantity <= 0 {
                    return Err(EntryError::InvalidData(
                        "Quantity must be a positive number of shares".to_string(),
                    )
                    .into());
                }
                // Quote provider I/O happens outside the per-account critical
                // section. The fetched price backs both the solvency check
                // and the persisted entry; it is not re-fetched in between.
                let quote = self.quote_provider.lookup(symbol.trim()).await?;
                EntryKind::Trade {
                    symbol: quote.symbol,
                    quantity,
                    unit_price: quote.price,
                    side,
                }
            }
            LedgerCommand::RecordCashFlow {
                amount,
                category,
                description,
                direction,
            } => EntryKind::CashFlow {
                amount,
                category,
                description,
                direction,
            },
            LedgerCommand::Deposit { amount } => EntryKind::CashFlow {
                amount,
                category: DEPOSIT_CATEGORY.to_string(),
                description: None,
                direction: FlowDirection::Inflow,
            },
        };

        self.apply_kind(account_id, kind).await
    }

    async fn delete_entry(&self, account_id: &str, entry_id: &str) -> Result<Receipt> {
        let lock = self.account_lock(account_id);
        let _guard = lock.lock().await;

        // A foreign entry is reported exactly like a missing one: the lookup
        // never confirms that another account's entry exists.
        let entry: Entry = match self.entry_repository.get_entry(entry_id) {
            Ok(entry) => entry,
            Err(Error::Database(DatabaseError::NotFound(_))) => {
                return Err(EntryError::NotFound(format!("Entry {} not found", entry_id)).into())
            }
            Err(e) => return Err(e),
        };
        if entry.account_id != account_id {
            return Err(EntryError::NotFound(format!("Entry {} not found", entry_id)).into());
        }

        if entry.kind.is_trade() {
            return Err(EntryError::UnsupportedOperation(
                "Trade entries are immutable and cannot be deleted".to_string(),
            )
            .into());
        }

        // Reversal needs no solvency re-check: it either restores funds or
        // withdraws a prior credit symmetrically.
        let balance = self
            .entry_repository
            .delete_with_cash_delta(entry_id, -entry.cash_delta())
            .await?;

        debug!(
            "Deleted entry {} from account {}, new balance {}",
            entry.id, account_id, balance
        );

        Ok(Receipt {
            entry_id: entry.id,
            balance,
        })
    }

    fn get_entries_by_account_id(&self, account_id: &str) -> Result<Vec<Entry>> {
        self.entry_repository.get_entries_by_account_id(account_id)
    }
}
