use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::entries::entries_constants::*;
use crate::entries::entries_errors::EntryError;

/// Side of a trade entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => TRADE_SIDE_BUY,
            TradeSide::Sell => TRADE_SIDE_SELL,
        }
    }
}

impl FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s == TRADE_SIDE_BUY => Ok(TradeSide::Buy),
            s if s == TRADE_SIDE_SELL => Ok(TradeSide::Sell),
            _ => Err(format!("Unknown trade side: {}", s)),
        }
    }
}

/// Direction of a cash-flow entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlowDirection {
    Inflow,
    Outflow,
}

impl FlowDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowDirection::Inflow => FLOW_DIRECTION_INFLOW,
            FlowDirection::Outflow => FLOW_DIRECTION_OUTFLOW,
        }
    }
}

impl FromStr for FlowDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s == FLOW_DIRECTION_INFLOW => Ok(FlowDirection::Inflow),
            s if s == FLOW_DIRECTION_OUTFLOW => Ok(FlowDirection::Outflow),
            _ => Err(format!("Unknown flow direction: {}", s)),
        }
    }
}

/// The monetary event recorded by an entry.
///
/// `quantity` and `amount` are strictly positive magnitudes; the side or
/// direction encodes the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EntryKind {
    #[serde(rename_all = "camelCase")]
    Trade {
        symbol: String,
        quantity: i64,
        unit_price: Decimal,
        side: TradeSide,
    },
    #[serde(rename_all = "camelCase")]
    CashFlow {
        amount: Decimal,
        category: String,
        description: Option<String>,
        direction: FlowDirection,
    },
}

impl EntryKind {
    /// Signed effect of this event on the account's cash balance.
    pub fn cash_delta(&self) -> Decimal {
        match self {
            EntryKind::Trade {
                quantity,
                unit_price,
                side,
                ..
            } => {
                let gross = Decimal::from(*quantity) * *unit_price;
                match side {
                    TradeSide::Buy => -gross,
                    TradeSide::Sell => gross,
                }
            }
            EntryKind::CashFlow {
                amount, direction, ..
            } => match direction {
                FlowDirection::Inflow => *amount,
                FlowDirection::Outflow => -*amount,
            },
        }
    }

    pub fn is_trade(&self) -> bool {
        matches!(self, EntryKind::Trade { .. })
    }
}

/// Domain model of one immutable ledger entry.
///
/// Entries are append-only: once persisted they are never mutated. Reversal
/// of a cash flow is an explicit delete with a compensating balance
/// adjustment, handled by the entry service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub account_id: String,
    #[serde(flatten)]
    pub kind: EntryKind,
    pub entry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Signed effect of this entry on the account's cash balance.
    pub fn cash_delta(&self) -> Decimal {
        self.kind.cash_delta()
    }
}

/// Input model for recording a new entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub id: Option<String>,
    pub account_id: String,
    #[serde(flatten)]
    pub kind: EntryKind,
    pub entry_date: DateTime<Utc>,
}

impl NewEntry {
    /// Validates the new entry data
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.account_id.trim().is_empty() {
            return Err(EntryError::InvalidData(
                "Account ID cannot be empty".to_string(),
            ));
        }
        match &self.kind {
            EntryKind::Trade {
                symbol,
                quantity,
                unit_price,
                ..
            } => {
                if symbol.trim().is_empty() {
                    return Err(EntryError::InvalidData(
                        "Symbol cannot be empty".to_string(),
                    ));
                }
                if *quantity <= 0 {
                    return Err(EntryError::InvalidData(
                        "Quantity must be a positive number of shares".to_string(),
                    ));
                }
                if *unit_price <= Decimal::zero() {
                    return Err(EntryError::InvalidData(
                        "Unit price must be positive".to_string(),
                    ));
                }
            }
            EntryKind::CashFlow {
                amount, category, ..
            } => {
                if *amount <= Decimal::zero() {
                    return Err(EntryError::InvalidData(
                        "Amount must be positive".to_string(),
                    ));
                }
                if category.trim().is_empty() {
                    return Err(EntryError::InvalidData(
                        "Category cannot be empty".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Signed effect of this entry on the account's cash balance.
    pub fn cash_delta(&self) -> Decimal {
        self.kind.cash_delta()
    }
}

/// A state-changing request entering the ledger.
///
/// Prices are never supplied by the caller: trades are priced by the quote
/// provider at apply time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum LedgerCommand {
    #[serde(rename_all = "camelCase")]
    PlaceTrade {
        symbol: String,
        quantity: i64,
        side: TradeSide,
    },
    #[serde(rename_all = "camelCase")]
    RecordCashFlow {
        amount: Decimal,
        category: String,
        description: Option<String>,
        direction: FlowDirection,
    },
    #[serde(rename_all = "camelCase")]
    Deposit { amount: Decimal },
}

/// Returned on every successful state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub entry_id: String,
    pub balance: Decimal,
}
