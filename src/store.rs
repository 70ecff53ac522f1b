// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Typed repository over named JSON slots. Each logical collection
//! lives under one key and is loaded/saved wholesale; a malformed
//! payload is logged and treated as "no data", never surfaced as a
//! hard failure.

use crate::models::{CurrentBalance, LastPeriod, NetWorthEntry, PlanningBudget, Transaction};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::warn;

pub mod slots {
    pub const TRANSACTIONS: &str = "transactions";
    pub const LAST_PERIOD: &str = "last_period";
    pub const CURRENT_BALANCE: &str = "current_balance";
    pub const PLANNING_BUDGET: &str = "planning_budget";
    pub const NET_WORTH_ENTRIES: &str = "net_worth_entries";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),
    #[error("failed to encode slot '{slot}': {source}")]
    Encode {
        slot: String,
        source: serde_json::Error,
    },
}

/// Key-value slot backend. The storage medium is swappable without the
/// aggregation logic noticing.
pub trait Store {
    fn get(&self, slot: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, slot: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, slot: &str) -> Result<(), StoreError>;
}

/// SQLite-backed store: one `slots` table of JSON payloads.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Result<SqliteStore, StoreError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS slots(
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )?;
        Ok(SqliteStore { conn })
    }
}

impl Store for SqliteStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key=?1", params![slot], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&self, slot: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO slots(key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
            params![slot, value],
        )?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM slots WHERE key=?1", params![slot])?;
        Ok(())
    }
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StoreError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(slot).cloned())
    }

    fn put(&self, slot: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = slots.remove(slot);
        Ok(())
    }
}

fn load_or_default<T: DeserializeOwned + Default>(
    store: &dyn Store,
    slot: &str,
) -> Result<T, StoreError> {
    match store.get(slot)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(slot, error = %err, "malformed slot payload, treating as empty");
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}

fn load_optional<T: DeserializeOwned>(
    store: &dyn Store,
    slot: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(slot)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(slot, error = %err, "malformed slot payload, treating as absent");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

fn save<T: Serialize>(store: &dyn Store, slot: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        slot: slot.to_string(),
        source,
    })?;
    store.put(slot, &raw)
}

pub fn load_transactions(store: &dyn Store) -> Result<Vec<Transaction>, StoreError> {
    load_or_default(store, slots::TRANSACTIONS)
}

pub fn save_transactions(store: &dyn Store, txs: &[Transaction]) -> Result<(), StoreError> {
    save(store, slots::TRANSACTIONS, &txs)
}

pub fn clear_transactions(store: &dyn Store) -> Result<(), StoreError> {
    store.remove(slots::TRANSACTIONS)
}

pub fn load_last_period(store: &dyn Store) -> Result<Option<LastPeriod>, StoreError> {
    load_optional(store, slots::LAST_PERIOD)
}

pub fn save_last_period(store: &dyn Store, period: &LastPeriod) -> Result<(), StoreError> {
    save(store, slots::LAST_PERIOD, period)
}

pub fn load_balance(store: &dyn Store) -> Result<Option<CurrentBalance>, StoreError> {
    load_optional(store, slots::CURRENT_BALANCE)
}

pub fn save_balance(store: &dyn Store, balance: &CurrentBalance) -> Result<(), StoreError> {
    save(store, slots::CURRENT_BALANCE, balance)
}

pub fn load_planning_budget(store: &dyn Store) -> Result<PlanningBudget, StoreError> {
    load_or_default(store, slots::PLANNING_BUDGET)
}

pub fn save_planning_budget(store: &dyn Store, budget: &PlanningBudget) -> Result<(), StoreError> {
    save(store, slots::PLANNING_BUDGET, budget)
}

pub fn load_net_worth_entries(store: &dyn Store) -> Result<Vec<NetWorthEntry>, StoreError> {
    load_or_default(store, slots::NET_WORTH_ENTRIES)
}

pub fn save_net_worth_entries(
    store: &dyn Store,
    entries: &[NetWorthEntry],
) -> Result<(), StoreError> {
    save(store, slots::NET_WORTH_ENTRIES, &entries)
}
