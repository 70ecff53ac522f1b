// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, TimeZone, Utc};
use nestegg::models::{LineItem, NetWorthEntry};
use nestegg::networth::{delete, effective_category, latest, merge_items, total, upsert};
use nestegg::utils::parse_line_items;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn breakdown_spec_parses_categories_and_custom_labels() {
    let items = parse_line_items("Cash=5000, Stocks=1200 ,Other:Art=300,").unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].category, "Cash");
    assert_eq!(items[0].amount, dec("5000"));
    // surrounding whitespace and trailing empty segments are dropped
    assert_eq!(items[1].category, "Stocks");
    assert_eq!(items[2].category, "Other");
    assert_eq!(items[2].custom_category.as_deref(), Some("Art"));
    assert_eq!(effective_category(&items[2]), "Art");
}

#[test]
fn breakdown_spec_rejects_malformed_input() {
    assert!(parse_line_items("").is_err());
    assert!(parse_line_items("Cash").is_err());
    assert!(parse_line_items("Cash=-5").is_err());
}

#[test]
fn merge_sums_amounts_per_category() {
    let existing = vec![LineItem::new("Cash", dec("5"))];
    let incoming = vec![LineItem::new("Cash", dec("10"))];
    let merged = merge_items(&existing, &incoming);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].amount, dec("15"));
}

#[test]
fn merge_keeps_disjoint_categories() {
    let existing = vec![LineItem::new("Cash", dec("5"))];
    let incoming = vec![LineItem::new("Stocks", dec("7"))];
    let merged = merge_items(&existing, &incoming);
    assert_eq!(merged.len(), 2);
    assert_eq!(total(&merged), dec("12"));
}

#[test]
fn merge_with_empty_incoming_is_identity() {
    let existing = vec![
        LineItem::new("Cash", dec("5")),
        LineItem::new("Stocks", dec("7")),
    ];
    let merged = merge_items(&existing, &[]);
    assert_eq!(merged.len(), 2);
    assert_eq!(total(&merged), total(&existing));
}

#[test]
fn merge_is_commutative_on_totals() {
    let a = vec![
        LineItem::new("Cash", dec("5")),
        LineItem::new("Crypto", dec("3")),
    ];
    let b = vec![
        LineItem::new("Cash", dec("2")),
        LineItem::new("Stocks", dec("9")),
    ];
    let ab = merge_items(&a, &b);
    let ba = merge_items(&b, &a);
    assert_eq!(total(&ab), total(&ba));
    assert_eq!(ab.len(), ba.len());
}

#[test]
fn other_items_merge_by_custom_label() {
    let existing = vec![LineItem::with_custom("Other", "Art", dec("100"))];
    let incoming = vec![
        LineItem::with_custom("Other", "Art", dec("50")),
        LineItem::with_custom("Other", "Wine", dec("25")),
    ];
    let merged = merge_items(&existing, &incoming);
    assert_eq!(merged.len(), 2);
    let art = merged
        .iter()
        .find(|i| effective_category(i) == "Art")
        .unwrap();
    assert_eq!(art.amount, dec("150"));
}

#[test]
fn custom_labels_are_normalized_for_merging() {
    let existing = vec![LineItem::with_custom("Other", "Rental Deposit", dec("100"))];
    let incoming = vec![LineItem::with_custom("Other", " rental deposit ", dec("50"))];
    let merged = merge_items(&existing, &incoming);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].amount, dec("150"));
    // first-seen spelling wins
    assert_eq!(effective_category(&merged[0]), "Rental Deposit");
}

#[test]
fn same_day_save_merges_and_keeps_identity() {
    let mut entries: Vec<NetWorthEntry> = Vec::new();
    let morning = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 6, 1, 21, 0, 0).unwrap();

    let first = upsert(
        &mut entries,
        vec![LineItem::new("Cash", dec("1000"))],
        vec![LineItem::new("Credit Cards", dec("200"))],
        None,
        morning,
    );
    let second = upsert(
        &mut entries,
        vec![LineItem::new("Cash", dec("500"))],
        Vec::new(),
        None,
        evening,
    );

    assert_eq!(first, second);
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.date, morning);
    assert_eq!(entry.total_assets, dec("1500"));
    assert_eq!(entry.total_liabilities, dec("200"));
    assert_eq!(entry.net_worth, dec("1300"));
}

#[test]
fn repeat_save_with_empty_submission_keeps_totals() {
    let mut entries: Vec<NetWorthEntry> = Vec::new();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    upsert(
        &mut entries,
        vec![LineItem::new("Cash", dec("1000"))],
        Vec::new(),
        None,
        now,
    );
    upsert(&mut entries, Vec::new(), Vec::new(), None, now);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].total_assets, dec("1000"));
}

#[test]
fn different_days_create_separate_entries_sorted_descending() {
    let mut entries: Vec<NetWorthEntry> = Vec::new();
    let day1 = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let day2 = day1 + Duration::days(1);

    upsert(
        &mut entries,
        vec![LineItem::new("Cash", dec("100"))],
        Vec::new(),
        None,
        day1,
    );
    upsert(
        &mut entries,
        vec![LineItem::new("Cash", dec("200"))],
        Vec::new(),
        None,
        day2,
    );

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, day2);
    assert_eq!(entries[1].date, day1);
    assert_eq!(latest(&entries).unwrap().total_assets, dec("200"));
}

#[test]
fn delete_removes_entry_by_id() {
    let mut entries: Vec<NetWorthEntry> = Vec::new();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let id = upsert(
        &mut entries,
        vec![LineItem::new("Cash", dec("100"))],
        Vec::new(),
        None,
        now,
    );
    assert!(delete(&mut entries, id));
    assert!(entries.is_empty());
    assert!(!delete(&mut entries, id));
}

#[test]
fn notes_survive_a_same_day_merge() {
    let mut entries: Vec<NetWorthEntry> = Vec::new();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    upsert(
        &mut entries,
        vec![LineItem::new("Cash", dec("100"))],
        Vec::new(),
        Some("rebalanced".into()),
        now,
    );
    upsert(
        &mut entries,
        vec![LineItem::new("Cash", dec("50"))],
        Vec::new(),
        None,
        now,
    );
    assert_eq!(entries[0].notes.as_deref(), Some("rebalanced"));
}
