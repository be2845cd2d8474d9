//! String constants for entry kinds as they are persisted by the storage layer.

pub const ENTRY_KIND_TRADE: &str = "TRADE";
pub const ENTRY_KIND_CASH_FLOW: &str = "CASH_FLOW";

pub const TRADE_SIDE_BUY: &str = "BUY";
pub const TRADE_SIDE_SELL: &str = "SELL";

pub const FLOW_DIRECTION_INFLOW: &str = "INFLOW";
pub const FLOW_DIRECTION_OUTFLOW: &str = "OUTFLOW";

/// Reserved category for deposit entries.
///
/// Deposits are recorded as inflow cash flows under this category so that
/// replaying the entry log always reproduces the cached balance.
pub const DEPOSIT_CATEGORY: &str = "Deposit";
