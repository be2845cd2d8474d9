use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{accounts, entries};
use crate::utils::{format_datetime, parse_decimal};

use super::model::EntryDB;
use cashfolio_core::entries::{Entry, EntryRepositoryTrait, NewEntry, ENTRY_KIND_TRADE};
use cashfolio_core::errors::Result;

/// Repository for managing ledger entries in the database.
///
/// Reads go through the pool; the atomic entry-plus-balance writes go
/// through the single-writer actor, whose transaction makes them
/// all-or-nothing.
pub struct EntryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl EntryRepository {
    /// Creates a new EntryRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Applies `delta` to the account's cached cash balance and returns the
/// resulting balance. Runs inside the caller's transaction.
fn adjust_cash(conn: &mut SqliteConnection, account_id: &str, delta: Decimal) -> Result<Decimal> {
    let cash_str: String = accounts::table
        .find(account_id)
        .select(accounts::cash)
        .first(conn)
        .map_err(IntoCore::into_core)?;

    let balance = parse_decimal(&cash_str, "cash") + delta;

    diesel::update(accounts::table.find(account_id))
        .set((
            accounts::cash.eq(balance.to_string()),
            accounts::updated_at.eq(format_datetime(&Utc::now())),
        ))
        .execute(conn)
        .map_err(IntoCore::into_core)?;

    Ok(balance)
}

#[async_trait]
impl EntryRepositoryTrait for EntryRepository {
    fn get_entry(&self, entry_id: &str) -> Result<Entry> {
        let mut conn = get_connection(&self.pool)?;

        let entry = entries::table
            .select(EntryDB::as_select())
            .find(entry_id)
            .first::<EntryDB>(&mut conn)
            .map_err(IntoCore::into_core)?;

        Ok(entry.into())
    }

    fn get_entries_by_account_id(&self, account_id: &str) -> Result<Vec<Entry>> {
        self.get_entries_since(account_id, None)
    }

    fn get_entries_since(
        &self,
        account_id: &str,
        lower_bound: Option<DateTime<Utc>>,
    ) -> Result<Vec<Entry>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = entries::table
            .filter(entries::account_id.eq(account_id))
            .into_boxed();

        if let Some(bound) = lower_bound {
            query = query.filter(entries::entry_date.ge(format_datetime(&bound)));
        }

        query
            .select(EntryDB::as_select())
            .order((entries::entry_date.asc(), entries::created_at.asc()))
            .load::<EntryDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Entry::from).collect())
            .map_err(IntoCore::into_core)
    }

    fn get_trade_entries(&self, account_id: &str, symbol: Option<&str>) -> Result<Vec<Entry>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = entries::table
            .filter(entries::account_id.eq(account_id))
            .filter(entries::kind.eq(ENTRY_KIND_TRADE))
            .into_boxed();

        if let Some(symbol) = symbol {
            query = query.filter(entries::symbol.eq(symbol));
        }

        query
            .select(EntryDB::as_select())
            .order((entries::entry_date.asc(), entries::created_at.asc()))
            .load::<EntryDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Entry::from).collect())
            .map_err(IntoCore::into_core)
    }

    async fn insert_with_cash_delta(
        &self,
        new_entry: NewEntry,
        cash_delta: Decimal,
    ) -> Result<(Entry, Decimal)> {
        let entry_db = EntryDB::from_new_entry(new_entry, Utc::now());

        self.writer
            .exec(move |conn| {
                diesel::insert_into(entries::table)
                    .values(&entry_db)
                    .execute(conn)
                    .map_err(IntoCore::into_core)?;

                let balance = adjust_cash(conn, &entry_db.account_id, cash_delta)?;

                Ok((Entry::from(entry_db), balance))
            })
            .await
    }

    async fn delete_with_cash_delta(&self, entry_id: &str, cash_delta: Decimal) -> Result<Decimal> {
        let entry_id = entry_id.to_string();

        self.writer
            .exec(move |conn| {
                let entry_db = entries::table
                    .select(EntryDB::as_select())
                    .find(&entry_id)
                    .first::<EntryDB>(conn)
                    .map_err(IntoCore::into_core)?;

                diesel::delete(entries::table.find(&entry_id))
                    .execute(conn)
                    .map_err(IntoCore::into_core)?;

                adjust_cash(conn, &entry_db.account_id, cash_delta)
            })
            .await
    }
}
