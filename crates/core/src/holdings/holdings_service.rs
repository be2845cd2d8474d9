use std::collections::BTreeMap;
use std::sync::Arc;

use crate::entries::{Entry, EntryKind, EntryRepositoryTrait, TradeSide};
use crate::errors::Result;

/// Net held quantity of `symbol` over a slice of entries.
///
/// Sums bought quantities minus sold quantities; non-trade entries and other
/// symbols are ignored. Returns 0 when no trades exist.
pub fn net_position(entries: &[Entry], symbol: &str) -> i64 {
    entries
        .iter()
        .filter_map(|entry| match &entry.kind {
            EntryKind::Trade {
                symbol: entry_symbol,
                quantity,
                side,
                ..
            } if entry_symbol == symbol => match side {
                TradeSide::Buy => Some(*quantity),
                TradeSide::Sell => Some(-*quantity),
            },
            _ => None,
        })
        .sum()
}

/// Net held quantity per symbol over a slice of entries.
///
/// Includes every symbol that appears in the trade log, even those whose net
/// quantity has returned to zero; callers filter for display.
pub fn position_map(entries: &[Entry]) -> BTreeMap<String, i64> {
    let mut positions: BTreeMap<String, i64> = BTreeMap::new();
    for entry in entries {
        if let EntryKind::Trade {
            symbol,
            quantity,
            side,
            ..
        } = &entry.kind
        {
            let signed = match side {
                TradeSide::Buy => *quantity,
                TradeSide::Sell => -*quantity,
            };
            *positions.entry(symbol.clone()).or_insert(0) += signed;
        }
    }
    positions
}

/// Trait defining the contract for the holdings service
pub trait HoldingsServiceTrait: Send + Sync {
    /// Net held quantity of one symbol for an account.
    fn net_position(&self, account_id: &str, symbol: &str) -> Result<i64>;

    /// Symbols currently held by an account with their net quantities.
    ///
    /// A symbol whose net position has returned to zero is excluded even
    /// though its history remains in the log.
    fn get_positions(&self, account_id: &str) -> Result<BTreeMap<String, i64>>;
}

/// Service deriving net positions from the trade log
pub struct HoldingsService {
    entry_repository: Arc<dyn EntryRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(entry_repository: Arc<dyn EntryRepositoryTrait>) -> Self {
        Self { entry_repository }
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn net_position(&self, account_id: &str, symbol: &str) -> Result<i64> {
        let trades = self
            .entry_repository
            .get_trade_entries(account_id, Some(symbol))?;
        Ok(net_position(&trades, symbol))
    }

    fn get_positions(&self, account_id: &str) -> Result<BTreeMap<String, i64>> {
        let trades = self.entry_repository.get_trade_entries(account_id, None)?;
        let mut positions = position_map(&trades);
        positions.retain(|_, quantity| *quantity > 0);
        Ok(positions)
    }
}
