use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::accounts::{Account, AccountServiceTrait, NewAccount};
use crate::entries::{Entry, EntryServiceTrait, FlowDirection, LedgerCommand, Receipt, TradeSide};
use crate::errors::Result;
use crate::holdings::{HoldingsServiceTrait, HoldingsView};
use crate::reporting::{DashboardSummary, GroupBy, ReportingServiceTrait, Window};
use cashfolio_market_data::{Quote, QuoteProvider};

/// Facade over the ledger: dispatches each externally-triggered action to
/// the balance engine or the aggregator. Holds no state of its own beyond
/// the composed service handles.
pub struct LedgerService {
    account_service: Arc<dyn AccountServiceTrait>,
    entry_service: Arc<dyn EntryServiceTrait>,
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    reporting_service: Arc<dyn ReportingServiceTrait>,
    quote_provider: Arc<dyn QuoteProvider>,
}

impl LedgerService {
    pub fn new(
        account_service: Arc<dyn AccountServiceTrait>,
        entry_service: Arc<dyn EntryServiceTrait>,
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        reporting_service: Arc<dyn ReportingServiceTrait>,
        quote_provider: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            account_service,
            entry_service,
            holdings_service,
            reporting_service,
            quote_provider,
        }
    }

    /// Creates a new account with a configured starting balance.
    pub async fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        self.account_service.create_account(new_account).await
    }

    /// Retrieves an account by its ID.
    pub fn get_account(&self, account_id: &str) -> Result<Account> {
        self.account_service.get_account(account_id)
    }

    /// Buys or sells shares of a symbol at the current quoted price.
    pub async fn place_trade(
        &self,
        account_id: &str,
        symbol: &str,
        quantity: i64,
        side: TradeSide,
    ) -> Result<Receipt> {
        debug!(
            "Placing {:?} trade of {} x {} for account {}",
            side, quantity, symbol, account_id
        );
        self.entry_service
            .apply(
                account_id,
                LedgerCommand::PlaceTrade {
                    symbol: symbol.to_string(),
                    quantity,
                    side,
                },
            )
            .await
    }

    /// Records an income or expense cash flow.
    pub async fn record_cash_flow(
        &self,
        account_id: &str,
        amount: Decimal,
        category: &str,
        description: Option<String>,
        direction: FlowDirection,
    ) -> Result<Receipt> {
        self.entry_service
            .apply(
                account_id,
                LedgerCommand::RecordCashFlow {
                    amount,
                    category: category.to_string(),
                    description,
                    direction,
                },
            )
            .await
    }

    /// Adds funds to the account.
    pub async fn deposit(&self, account_id: &str, amount: Decimal) -> Result<Receipt> {
        self.entry_service
            .apply(account_id, LedgerCommand::Deposit { amount })
            .await
    }

    /// Reverses a cash-flow entry.
    pub async fn delete_entry(&self, account_id: &str, entry_id: &str) -> Result<Receipt> {
        self.entry_service.delete_entry(account_id, entry_id).await
    }

    /// Computes the dashboard view for an account.
    pub async fn get_dashboard(
        &self,
        account_id: &str,
        window: Window,
        group_by: Option<GroupBy>,
    ) -> Result<DashboardSummary> {
        self.reporting_service
            .summarize(account_id, window, group_by)
            .await
    }

    /// The full entry log for an account, newest first.
    pub fn get_history(&self, account_id: &str) -> Result<Vec<Entry>> {
        let mut entries = self.entry_service.get_entries_by_account_id(account_id)?;
        entries.reverse();
        Ok(entries)
    }

    /// Currently-held symbols with live valuations.
    pub async fn get_holdings(&self, account_id: &str) -> Result<HoldingsView> {
        self.reporting_service.get_holdings(account_id).await
    }

    /// Net held quantity of one symbol.
    pub fn net_position(&self, account_id: &str, symbol: &str) -> Result<i64> {
        self.holdings_service.net_position(account_id, symbol)
    }

    /// Looks up the current quote for a symbol.
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        Ok(self.quote_provider.lookup(symbol).await?)
    }
}
