#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountRepositoryTrait, NewAccount};
    use crate::entries::{
        Entry, EntryKind, EntryRepositoryTrait, FlowDirection, NewEntry, TradeSide,
    };
    use crate::errors::Result;
    use crate::reporting::{GroupBy, ReportingService, ReportingServiceTrait, Window};
    use async_trait::async_trait;
    use cashfolio_market_data::{MarketDataError, Quote, QuoteProvider};
    use chrono::{DateTime, Duration, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct MockAccountRepository {
        account: Account,
    }

    #[async_trait]
    impl AccountRepositoryTrait for MockAccountRepository {
        async fn create(&self, _new_account: NewAccount) -> Result<Account> {
            unimplemented!()
        }

        fn get_by_id(&self, _account_id: &str) -> Result<Account> {
            Ok(self.account.clone())
        }

        fn list(&self) -> Result<Vec<Account>> {
            Ok(vec![self.account.clone()])
        }
    }

    struct MockEntryRepository {
        entries: Vec<Entry>,
    }

    #[async_trait]
    impl EntryRepositoryTrait for MockEntryRepository {
        fn get_entry(&self, _entry_id: &str) -> Result<Entry> {
            unimplemented!()
        }

        fn get_entries_by_account_id(&self, account_id: &str) -> Result<Vec<Entry>> {
            self.get_entries_since(account_id, None)
        }

        fn get_entries_since(
            &self,
            _account_id: &str,
            lower_bound: Option<DateTime<Utc>>,
        ) -> Result<Vec<Entry>> {
            Ok(self
                .entries
                .iter()
                .filter(|e| lower_bound.is_none_or(|bound| e.entry_date >= bound))
                .cloned()
                .collect())
        }

        fn get_trade_entries(&self, _account_id: &str, symbol: Option<&str>) -> Result<Vec<Entry>> {
            Ok(self
                .entries
                .iter()
                .filter(|e| match (&e.kind, symbol) {
                    (EntryKind::Trade { symbol: s, .. }, Some(wanted)) => s == wanted,
                    (EntryKind::Trade { .. }, None) => true,
                    _ => false,
                })
                .cloned()
                .collect())
        }

        async fn insert_with_cash_delta(
            &self,
            _new_entry: NewEntry,
            _cash_delta: Decimal,
        ) -> Result<(Entry, Decimal)> {
            unimplemented!()
        }

        async fn delete_with_cash_delta(
            &self,
            _entry_id: &str,
            _cash_delta: Decimal,
        ) -> Result<Decimal> {
            unimplemented!()
        }
    }

    struct MockQuoteProvider {
        prices: HashMap<String, Decimal>,
    }

    #[async_trait]
    impl QuoteProvider for MockQuoteProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn lookup(&self, symbol: &str) -> std::result::Result<Quote, MarketDataError> {
            match self.prices.get(symbol) {
                Some(price) => Ok(Quote {
                    symbol: symbol.to_string(),
                    name: symbol.to_string(),
                    price: *price,
                    as_of: Utc::now(),
                }),
                None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            }
        }
    }

    fn account(cash: Decimal) -> Account {
        Account {
            id: "acct-1".to_string(),
            name: "Owner".to_string(),
            cash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn outflow(id: &str, amount: Decimal, category: &str, days_ago: i64) -> Entry {
        Entry {
            id: id.to_string(),
            account_id: "acct-1".to_string(),
            kind: EntryKind::CashFlow {
                amount,
                category: category.to_string(),
                description: None,
                direction: FlowDirection::Outflow,
            },
            entry_date: Utc::now() - Duration::days(days_ago),
            created_at: Utc::now(),
        }
    }

    fn inflow(id: &str, amount: Decimal, days_ago: i64) -> Entry {
        Entry {
            id: id.to_string(),
            account_id: "acct-1".to_string(),
            kind: EntryKind::CashFlow {
                amount,
                category: "Salary".to_string(),
                description: None,
                direction: FlowDirection::Inflow,
            },
            entry_date: Utc::now() - Duration::days(days_ago),
            created_at: Utc::now(),
        }
    }

    fn trade(id: &str, symbol: &str, quantity: i64, side: TradeSide, days_ago: i64) -> Entry {
        Entry {
            id: id.to_string(),
            account_id: "acct-1".to_string(),
            kind: EntryKind::Trade {
                symbol: symbol.to_string(),
                quantity,
                unit_price: dec!(10),
                side,
            },
            entry_date: Utc::now() - Duration::days(days_ago),
            created_at: Utc::now(),
        }
    }

    fn build_service(
        cash: Decimal,
        entries: Vec<Entry>,
        prices: &[(&str, Decimal)],
    ) -> ReportingService {
        ReportingService::new(
            Arc::new(MockAccountRepository {
                account: account(cash),
            }),
            Arc::new(MockEntryRepository { entries }),
            Arc::new(MockQuoteProvider {
                prices: prices
                    .iter()
                    .map(|(symbol, price)| (symbol.to_string(), *price))
                    .collect(),
            }),
        )
    }

    #[tokio::test]
    async fn test_category_breakdown_sums_per_category() {
        let service = build_service(
            dec!(1000),
            vec![
                outflow("1", dec!(50), "Food", 3),
                outflow("2", dec!(30), "Food", 2),
                outflow("3", dec!(200), "Rent", 1),
            ],
            &[],
        );

        let summary = service
            .summarize("acct-1", Window::AllTime, Some(GroupBy::Category))
            .await
            .unwrap();

        let by_category = summary.by_category.unwrap();
        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category.get("Food"), Some(&dec!(80)));
        assert_eq!(by_category.get("Rent"), Some(&dec!(200)));
        assert_eq!(summary.total_outflow, dec!(280));
    }

    #[tokio::test]
    async fn test_breakdown_skipped_without_grouping() {
        let service = build_service(dec!(100), vec![outflow("1", dec!(10), "Food", 0)], &[]);

        let summary = service
            .summarize("acct-1", Window::AllTime, None)
            .await
            .unwrap();
        assert!(summary.by_category.is_none());
        assert_eq!(summary.total_outflow, dec!(10));
    }

    #[tokio::test]
    async fn test_daily_trend_is_ascending_and_split_by_direction() {
        let service = build_service(
            dec!(0),
            vec![
                outflow("1", dec!(5), "Food", 0),
                outflow("2", dec!(7), "Food", 2),
                outflow("3", dec!(3), "Food", 2),
                inflow("4", dec!(100), 1),
            ],
            &[],
        );

        let summary = service
            .summarize("acct-1", Window::AllTime, None)
            .await
            .unwrap();

        assert_eq!(summary.outflow_by_day.len(), 2);
        assert!(summary.outflow_by_day[0].day < summary.outflow_by_day[1].day);
        assert_eq!(summary.outflow_by_day[0].total, dec!(10));
        assert_eq!(summary.outflow_by_day[1].total, dec!(5));

        assert_eq!(summary.inflow_by_day.len(), 1);
        assert_eq!(summary.inflow_by_day[0].total, dec!(100));
        assert_eq!(summary.total_inflow, dec!(100));
        assert_eq!(summary.total_outflow, dec!(15));
    }

    #[tokio::test]
    async fn test_window_excludes_older_entries() {
        let service = build_service(
            dec!(0),
            vec![
                outflow("1", dec!(40), "Food", 40),
                outflow("2", dec!(10), "Food", 2),
            ],
            &[],
        );

        let summary = service
            .summarize("acct-1", Window::LastNDays(7), None)
            .await
            .unwrap();
        assert_eq!(summary.total_outflow, dec!(10));

        let summary = service
            .summarize("acct-1", Window::AllTime, None)
            .await
            .unwrap();
        assert_eq!(summary.total_outflow, dec!(50));
    }

    #[tokio::test]
    async fn test_net_worth_values_open_positions() {
        let service = build_service(
            dec!(950),
            vec![
                trade("1", "ACME", 10, TradeSide::Buy, 5),
                trade("2", "GLOBEX", 4, TradeSide::Buy, 5),
                trade("3", "GLOBEX", 4, TradeSide::Sell, 4),
            ],
            &[("ACME", dec!(25))],
        );

        let summary = service
            .summarize("acct-1", Window::AllTime, None)
            .await
            .unwrap();

        // GLOBEX is closed out and must not appear at all.
        assert_eq!(summary.holdings.len(), 1);
        assert_eq!(summary.holdings[0].symbol, "ACME");
        assert_eq!(summary.holdings[0].quantity, 10);
        assert_eq!(summary.holdings[0].market_value, Some(dec!(250)));
        assert!(summary.missing_quotes.is_empty());
        assert_eq!(summary.net_worth, dec!(1200));
    }

    #[tokio::test]
    async fn test_quote_failure_degrades_without_failing_summary() {
        let service = build_service(
            dec!(100),
            vec![
                trade("1", "ACME", 2, TradeSide::Buy, 5),
                trade("2", "DELISTED", 3, TradeSide::Buy, 5),
            ],
            &[("ACME", dec!(50))],
        );

        let summary = service
            .summarize("acct-1", Window::AllTime, None)
            .await
            .unwrap();

        assert_eq!(summary.missing_quotes, vec!["DELISTED".to_string()]);
        let delisted = summary
            .holdings
            .iter()
            .find(|h| h.symbol == "DELISTED")
            .unwrap();
        assert_eq!(delisted.quantity, 3);
        assert_eq!(delisted.price, None);
        assert_eq!(delisted.market_value, None);

        // Net worth counts only the valued holding.
        assert_eq!(summary.net_worth, dec!(200));
    }

    #[tokio::test]
    async fn test_get_holdings_reports_valuations() {
        let service = build_service(
            dec!(0),
            vec![trade("1", "ACME", 3, TradeSide::Buy, 1)],
            &[("ACME", dec!(12.50))],
        );

        let view = service.get_holdings("acct-1").await.unwrap();
        assert_eq!(view.holdings.len(), 1);
        assert_eq!(view.holdings[0].price, Some(dec!(12.50)));
        assert_eq!(view.holdings[0].market_value, Some(dec!(37.50)));
        assert!(view.missing_quotes.is_empty());
    }
}
