//! Error types for market data operations.

use thiserror::Error;
use yahoo_finance_api::YahooError;

/// Errors that can occur while fetching market data.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider. Terminal;
    /// retrying will not help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A provider-specific failure (network, upstream outage, bad payload).
    #[error("Provider error: {provider} - {message}")]
    ProviderError { provider: String, message: String },

    /// The provider responded but the payload could not be interpreted.
    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<YahooError> for MarketDataError {
    fn from(error: YahooError) -> Self {
        match error {
            YahooError::FetchFailed(e) => MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: e,
            },
            YahooError::NoQuotes => MarketDataError::SymbolNotFound("No quotes found".to_string()),
            YahooError::NoResult => MarketDataError::SymbolNotFound("No data found".to_string()),
            _ => MarketDataError::Unknown(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_quotes_maps_to_symbol_not_found() {
        let err: MarketDataError = YahooError::NoQuotes.into();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
    }

    #[test]
    fn test_fetch_failure_maps_to_provider_error() {
        let err: MarketDataError = YahooError::FetchFailed("timeout".to_string()).into();
        assert!(matches!(err, MarketDataError::ProviderError { .. }));
    }
}
