//! Database models for accounts.

use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use cashfolio_core::accounts::{Account, NewAccount};

use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for accounts
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: String,
    pub name: String,
    pub cash: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            cash: parse_decimal(&db.cash, "cash"),
            created_at: parse_datetime(&db.created_at, "created_at"),
            updated_at: parse_datetime(&db.updated_at, "updated_at"),
            id: db.id,
            name: db.name,
        }
    }
}

impl From<NewAccount> for AccountDB {
    fn from(domain: NewAccount) -> Self {
        let now = format_datetime(&Utc::now());
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            cash: domain.cash.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
