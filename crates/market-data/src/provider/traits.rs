//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for quote providers.
///
/// Implement this trait to add support for a new quote source.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// A constant string like "YAHOO"; used for logging and error reporting.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    async fn lookup(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
