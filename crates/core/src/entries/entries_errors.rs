use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for ledger-entry operations.
///
/// Business-rule violations (`InsufficientFunds`, `InsufficientHoldings`) are
/// ordinary outcomes reported verbatim to the caller, not faults.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Insufficient holdings of {symbol}: requested {requested}, held {held}")]
    InsufficientHoldings {
        symbol: String,
        requested: i64,
        held: i64,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl From<EntryError> for String {
    fn from(error: EntryError) -> Self {
        error.to_string()
    }
}
