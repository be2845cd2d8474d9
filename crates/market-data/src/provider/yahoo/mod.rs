//! Yahoo Finance quote provider.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::traits::QuoteProvider;

/// Yahoo Finance quote provider.
///
/// Resolves equities, ETFs and crypto symbols (e.g. AAPL, SHOP.TO, BTC-USD)
/// to their latest close price.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: format!("Failed to initialize Yahoo connector: {}", e),
        })?;
        Ok(Self { connector })
    }

    /// Display name of the instrument, when Yahoo's search knows one.
    async fn short_name(&self, symbol: &str) -> Option<String> {
        let result = self.connector.search_ticker(symbol).await.ok()?;
        result
            .quotes
            .iter()
            .find(|item| item.symbol.eq_ignore_ascii_case(symbol))
            .map(|item| item.short_name.clone())
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn lookup(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        debug!("Looking up quote for {}", symbol);

        let response = self.connector.get_latest_quotes(&symbol, "1d").await?;
        let latest = response.last_quote()?;

        let price = Decimal::from_f64(latest.close).ok_or_else(|| {
            MarketDataError::ParsingError(format!(
                "Invalid close price for {}: {}",
                symbol, latest.close
            ))
        })?;
        let as_of = Utc
            .timestamp_opt(latest.timestamp as i64, 0)
            .single()
            .unwrap_or_else(Utc::now);

        let name = self
            .short_name(&symbol)
            .await
            .unwrap_or_else(|| symbol.clone());

        Ok(Quote {
            symbol,
            name,
            price,
            as_of,
        })
    }
}
