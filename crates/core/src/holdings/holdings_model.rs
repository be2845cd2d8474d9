use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One currently-held instrument with its live valuation.
///
/// `price` and `market_value` are `None` when the quote provider could not
/// supply a price; the holding is still listed, but excluded from totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub quantity: i64,
    pub price: Option<Decimal>,
    pub market_value: Option<Decimal>,
}

/// The holdings of one account, valued with the latest known prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsView {
    pub holdings: Vec<Holding>,
    /// Symbols whose live price could not be fetched.
    pub missing_quotes: Vec<String>,
}
