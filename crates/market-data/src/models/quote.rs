use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A current market quote for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Canonical (uppercase) symbol as known by the provider.
    pub symbol: String,
    /// Display name of the instrument; falls back to the symbol when the
    /// provider has no name on record.
    pub name: String,
    pub price: Decimal,
    pub as_of: DateTime<Utc>,
}
