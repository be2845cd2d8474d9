//! Database models for ledger entries.
//!
//! The polymorphic entry is stored flattened: the `kind` discriminator plus
//! nullable columns for each variant's fields.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cashfolio_core::entries::{
    Entry, EntryKind, FlowDirection, NewEntry, TradeSide, ENTRY_KIND_CASH_FLOW, ENTRY_KIND_TRADE,
};

use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for ledger entries
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntryDB {
    pub id: String,
    pub account_id: String,
    pub kind: String,
    pub symbol: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<String>,
    pub side: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub direction: Option<String>,
    pub entry_date: String,
    pub created_at: String,
}

impl EntryDB {
    /// Builds the storable row for a new entry, stamping `created_at` with
    /// `now` and generating an ID when the caller supplied none.
    pub fn from_new_entry(new_entry: NewEntry, now: DateTime<Utc>) -> Self {
        let id = new_entry
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let mut db = Self {
            id,
            account_id: new_entry.account_id,
            kind: String::new(),
            symbol: None,
            quantity: None,
            unit_price: None,
            side: None,
            amount: None,
            category: None,
            description: None,
            direction: None,
            entry_date: format_datetime(&new_entry.entry_date),
            created_at: format_datetime(&now),
        };

        match new_entry.kind {
            EntryKind::Trade {
                symbol,
                quantity,
                unit_price,
                side,
            } => {
                db.kind = ENTRY_KIND_TRADE.to_string();
                db.symbol = Some(symbol);
                db.quantity = Some(quantity);
                db.unit_price = Some(unit_price.to_string());
                db.side = Some(side.as_str().to_string());
            }
            EntryKind::CashFlow {
                amount,
                category,
                description,
                direction,
            } => {
                db.kind = ENTRY_KIND_CASH_FLOW.to_string();
                db.amount = Some(amount.to_string());
                db.category = Some(category);
                db.description = description;
                db.direction = Some(direction.as_str().to_string());
            }
        }

        db
    }
}

impl From<EntryDB> for Entry {
    fn from(db: EntryDB) -> Self {
        let kind = if db.kind == ENTRY_KIND_TRADE {
            EntryKind::Trade {
                symbol: db.symbol.clone().unwrap_or_default(),
                quantity: db.quantity.unwrap_or(0),
                unit_price: db
                    .unit_price
                    .as_deref()
                    .map(|v| parse_decimal(v, "unit_price"))
                    .unwrap_or(Decimal::ZERO),
                side: db
                    .side
                    .as_deref()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        log::error!("Unknown trade side on entry {}", db.id);
                        TradeSide::Buy
                    }),
            }
        } else {
            EntryKind::CashFlow {
                amount: db
                    .amount
                    .as_deref()
                    .map(|v| parse_decimal(v, "amount"))
                    .unwrap_or(Decimal::ZERO),
                category: db.category.clone().unwrap_or_default(),
                description: db.description.clone(),
                direction: db
                    .direction
                    .as_deref()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        log::error!("Unknown flow direction on entry {}", db.id);
                        FlowDirection::Inflow
                    }),
            }
        };

        Self {
            kind,
            entry_date: parse_datetime(&db.entry_date, "entry_date"),
            created_at: parse_datetime(&db.created_at, "created_at"),
            id: db.id,
            account_id: db.account_id,
        }
    }
}
