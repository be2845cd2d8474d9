use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::holdings::Holding;

/// Time range scoping an aggregate query.
///
/// A closed set of window kinds, each resolved to an explicit inclusive date
/// lower bound at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Window {
    AllTime,
    CurrentMonth,
    LastNDays(u32),
}

impl Window {
    /// Inclusive lower bound of the window relative to `today`.
    ///
    /// `AllTime` imposes no bound. `LastNDays(n)` is the n-day window ending
    /// today, so `LastNDays(1)` covers today only.
    pub fn lower_bound(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Window::AllTime => None,
            Window::CurrentMonth => Some(today.with_day(1).unwrap_or(today)),
            Window::LastNDays(n) => Some(today - Duration::days(i64::from(*n) - 1)),
        }
    }
}

/// Optional grouping dimension for aggregate queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    Category,
}

/// Total of one calendar day's inflows or outflows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub total: Decimal,
}

/// The windowed aggregate view of one account.
///
/// Computed on demand and never cached beyond the query. The day sequences
/// are ordered ascending by day; categories with no matching entries are
/// omitted rather than zero-filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub account_id: String,
    pub cash: Decimal,
    pub total_inflow: Decimal,
    pub total_outflow: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_category: Option<BTreeMap<String, Decimal>>,
    pub inflow_by_day: Vec<DailyTotal>,
    pub outflow_by_day: Vec<DailyTotal>,
    pub holdings: Vec<Holding>,
    /// Symbols whose live price could not be fetched and are excluded from
    /// `net_worth`.
    pub missing_quotes: Vec<String>,
    pub net_worth: Decimal,
}
