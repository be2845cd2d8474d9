use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use futures::future::join_all;
use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::accounts::AccountRepositoryTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::entries::{EntryKind, EntryRepositoryTrait, FlowDirection};
use crate::errors::Result;
use crate::holdings::{position_map, Holding, HoldingsView};
use crate::reporting::reporting_model::{DailyTotal, DashboardSummary, GroupBy, Window};
use cashfolio_market_data::QuoteProvider;

/// Trait defining the contract for the reporting service
#[async_trait]
pub trait ReportingServiceTrait: Send + Sync {
    /// Computes the windowed aggregate view of one account.
    async fn summarize(
        &self,
        account_id: &str,
        window: Window,
        group_by: Option<GroupBy>,
    ) -> Result<DashboardSummary>;

    /// Lists the account's currently-held symbols with live valuations.
    async fn get_holdings(&self, account_id: &str) -> Result<HoldingsView>;
}

/// Service answering windowed and categorical aggregate queries
pub struct ReportingService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    entry_repository: Arc<dyn EntryRepositoryTrait>,
    quote_provider: Arc<dyn QuoteProvider>,
}

impl ReportingService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        entry_repository: Arc<dyn EntryRepositoryTrait>,
        quote_provider: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            account_repository,
            entry_repository,
            quote_provider,
        }
    }

    /// Values a set of net positions with live quotes.
    ///
    /// A provider failure for one symbol never fails the whole view: the
    /// holding is reported without a price and its symbol is surfaced in
    /// `missing_quotes`.
    async fn value_positions(&self, positions: BTreeMap<String, i64>) -> HoldingsView {
        let lookups = positions.keys().cloned().map(|symbol| {
            let provider = Arc::clone(&self.quote_provider);
            async move {
                let result = provider.lookup(&symbol).await;
                (symbol, result)
            }
        });

        let mut holdings = Vec::with_capacity(positions.len());
        let mut missing_quotes = Vec::new();

        for (symbol, result) in join_all(lookups).await {
            let quantity = positions[&symbol];
            match result {
                Ok(quote) => {
                    let market_value = Decimal::from(quantity) * quote.price;
                    holdings.push(Holding {
                        symbol,
                        quantity,
                        price: Some(quote.price.round_dp(DISPLAY_DECIMAL_PRECISION)),
                        market_value: Some(market_value.round_dp(DISPLAY_DECIMAL_PRECISION)),
                    });
                }
                Err(e) => {
                    warn!("No quote for held symbol {}: {}", symbol, e);
                    missing_quotes.push(symbol.clone());
                    holdings.push(Holding {
                        symbol,
                        quantity,
                        price: None,
                        market_value: None,
                    });
                }
            }
        }

        HoldingsView {
            holdings,
            missing_quotes,
        }
    }
}

#[async_trait]
impl ReportingServiceTrait for ReportingService {
    async fn summarize(
        &self,
        account_id: &str,
        window: Window,
        group_by: Option<GroupBy>,
    ) -> Result<DashboardSummary> {
        debug!("Summarizing account {} over {:?}", account_id, window);

        let account = self.account_repository.get_by_id(account_id)?;

        let today = Utc::now().date_naive();
        let lower_bound = window.lower_bound(today).map(|day| {
            let midnight = day.and_hms_opt(0, 0, 0).unwrap_or_default();
            Utc.from_utc_datetime(&midnight)
        });
        let entries = self
            .entry_repository
            .get_entries_since(account_id, lower_bound)?;

        let mut total_inflow = Decimal::zero();
        let mut total_outflow = Decimal::zero();
        let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut inflow_by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        let mut outflow_by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

        for entry in &entries {
            if let EntryKind::CashFlow {
                amount,
                category,
                direction,
                ..
            } = &entry.kind
            {
                let day = entry.entry_date.date_naive();
                match direction {
                    FlowDirection::Inflow => {
                        total_inflow += *amount;
                        *inflow_by_day.entry(day).or_insert_with(Decimal::zero) += *amount;
                    }
                    FlowDirection::Outflow => {
                        total_outflow += *amount;
                        *outflow_by_day.entry(day).or_insert_with(Decimal::zero) += *amount;
                        if group_by == Some(GroupBy::Category) {
                            *by_category
                                .entry(category.clone())
                                .or_insert_with(Decimal::zero) += *amount;
                        }
                    }
                }
            }
        }

        // Positions are derived from the full trade log; the window scopes
        // cash-flow aggregates only.
        let trades = self.entry_repository.get_trade_entries(account_id, None)?;
        let mut positions = position_map(&trades);
        positions.retain(|_, quantity| *quantity > 0);
        let holdings_view = self.value_positions(positions).await;

        let market_total: Decimal = holdings_view
            .holdings
            .iter()
            .filter_map(|holding| holding.market_value)
            .sum();
        let net_worth = account.cash + market_total;

        let collect_days = |days: BTreeMap<NaiveDate, Decimal>| {
            days.into_iter()
                .map(|(day, total)| DailyTotal {
                    day,
                    total: total.round_dp(DISPLAY_DECIMAL_PRECISION),
                })
                .collect::<Vec<_>>()
        };

        Ok(DashboardSummary {
            account_id: account.id,
            cash: account.cash.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_inflow: total_inflow.round_dp(DISPLAY_DECIMAL_PRECISION),
            total_outflow: total_outflow.round_dp(DISPLAY_DECIMAL_PRECISION),
            by_category: group_by.map(|_| {
                by_category
                    .into_iter()
                    .map(|(category, total)| (category, total.round_dp(DISPLAY_DECIMAL_PRECISION)))
                    .collect()
            }),
            inflow_by_day: collect_days(inflow_by_day),
            outflow_by_day: collect_days(outflow_by_day),
            holdings: holdings_view.holdings,
            missing_quotes: holdings_view.missing_quotes,
            net_worth: net_worth.round_dp(DISPLAY_DECIMAL_PRECISION),
        })
    }

    async fn get_holdings(&self, account_id: &str) -> Result<HoldingsView> {
        let trades = self.entry_repository.get_trade_entries(account_id, None)?;
        let mut positions = position_map(&trades);
        positions.retain(|_, quantity| *quantity > 0);
        Ok(self.value_positions(positions).await)
    }
}
