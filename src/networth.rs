// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Net-worth entry maintenance: per-category merging of a day's
//! submissions into at most one entry per calendar day.

use crate::models::{LineItem, NetWorthEntry};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Effective category label of a line item: the custom label when the
/// category is "Other", else the category itself.
pub fn effective_category(item: &LineItem) -> &str {
    if item.category == "Other" {
        item.custom_category.as_deref().unwrap_or("Other")
    } else {
        &item.category
    }
}

/// Merge key: trimmed and case-folded, so "rental deposit" and
/// "Rental Deposit " land in the same bucket. The first-seen spelling
/// is kept for display.
fn merge_key(item: &LineItem) -> String {
    effective_category(item).trim().to_lowercase()
}

/// Sums two line-item sets per category key. A key present on only one
/// side contributes its amount unchanged.
pub fn merge_items(existing: &[LineItem], incoming: &[LineItem]) -> Vec<LineItem> {
    let mut merged: Vec<LineItem> = Vec::with_capacity(existing.len() + incoming.len());
    for item in existing.iter().chain(incoming) {
        let key = merge_key(item);
        match merged.iter_mut().find(|m| merge_key(m) == key) {
            Some(slot) => slot.amount += item.amount,
            None => merged.push(item.clone()),
        }
    }
    merged
}

pub fn total(items: &[LineItem]) -> Decimal {
    items.iter().map(|i| i.amount).sum()
}

/// Saves a day's asset/liability submission. If an entry already exists
/// for `now`'s calendar day it is merged into (keeping its id and
/// original timestamp so chronological ordering stays stable);
/// otherwise a new entry is created. The list is re-sorted descending
/// by date either way. Returns the id of the affected entry.
pub fn upsert(
    entries: &mut Vec<NetWorthEntry>,
    assets: Vec<LineItem>,
    liabilities: Vec<LineItem>,
    notes: Option<String>,
    now: DateTime<Utc>,
) -> Uuid {
    let today = now.date_naive();
    let existing = entries.iter().position(|e| e.date.date_naive() == today);

    let (id, date, assets, liabilities, notes) = match existing {
        Some(idx) => {
            let prior = &entries[idx];
            let merged_assets = merge_items(&prior.assets, &assets);
            let merged_liabilities = merge_items(&prior.liabilities, &liabilities);
            let notes = notes.or_else(|| prior.notes.clone());
            let (id, date) = (prior.id, prior.date);
            entries.remove(idx);
            (id, date, merged_assets, merged_liabilities, notes)
        }
        None => (Uuid::new_v4(), now, assets, liabilities, notes),
    };

    let total_assets = total(&assets);
    let total_liabilities = total(&liabilities);
    entries.push(NetWorthEntry {
        id,
        date,
        assets,
        liabilities,
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        notes,
    });
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    id
}

/// Removes the entry with the given id; returns whether one was found.
pub fn delete(entries: &mut Vec<NetWorthEntry>, id: Uuid) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id != id);
    entries.len() != before
}

/// Latest entry; callers rely on the descending order kept by `upsert`.
pub fn latest(entries: &[NetWorthEntry]) -> Option<&NetWorthEntry> {
    entries.first()
}
