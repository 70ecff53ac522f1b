// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::models::{Month, TxKind};
use nestegg::store::{self, MemoryStore};
use nestegg::{cli, commands};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn run_tx(store: &MemoryStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["nestegg", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        commands::transactions::handle(store, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn add_records_a_transaction_and_remembers_the_period() {
    let store = MemoryStore::new();
    run_tx(
        &store,
        &[
            "add", "--year", "2024", "--month", "March", "--kind", "income", "--amount", "2500",
        ],
    )
    .unwrap();

    let txs = store::load_transactions(&store).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].year, 2024);
    assert_eq!(txs[0].month, Month::March);
    assert_eq!(txs[0].kind, TxKind::Income);
    assert_eq!(txs[0].amount, dec("2500"));

    let period = store::load_last_period(&store).unwrap().unwrap();
    assert_eq!((period.year, period.month), (2024, Month::March));
}

#[test]
fn add_without_period_flags_reuses_the_last_period() {
    let store = MemoryStore::new();
    run_tx(
        &store,
        &[
            "add", "--year", "2023", "--month", "November", "--kind", "income", "--amount", "100",
        ],
    )
    .unwrap();
    run_tx(&store, &["add", "--kind", "expense", "--amount", "40"]).unwrap();

    let txs = store::load_transactions(&store).unwrap();
    assert_eq!(txs[1].year, 2023);
    assert_eq!(txs[1].month, Month::November);
    assert_eq!(txs[1].kind, TxKind::Expense);
}

#[test]
fn add_rejects_negative_amounts() {
    let store = MemoryStore::new();
    let result = run_tx(
        &store,
        &[
            "add", "--year", "2024", "--month", "March", "--kind", "income", "--amount=-5",
        ],
    );
    assert!(result.is_err());
    assert!(store::load_transactions(&store).unwrap().is_empty());
}

#[test]
fn delete_removes_one_transaction_by_id() {
    let store = MemoryStore::new();
    run_tx(
        &store,
        &[
            "add", "--year", "2024", "--month", "March", "--kind", "income", "--amount", "100",
        ],
    )
    .unwrap();
    run_tx(&store, &["add", "--kind", "expense", "--amount", "60"]).unwrap();

    let txs = store::load_transactions(&store).unwrap();
    let victim = txs[0].id.to_string();
    run_tx(&store, &["delete", "--id", &victim]).unwrap();

    let remaining = store::load_transactions(&store).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].kind, TxKind::Expense);

    assert!(run_tx(&store, &["delete", "--id", &victim]).is_err());
}

#[test]
fn delete_month_clears_one_bucket_only() {
    let store = MemoryStore::new();
    run_tx(
        &store,
        &[
            "add", "--year", "2024", "--month", "March", "--kind", "income", "--amount", "100",
        ],
    )
    .unwrap();
    run_tx(
        &store,
        &[
            "add", "--year", "2024", "--month", "April", "--kind", "income", "--amount", "200",
        ],
    )
    .unwrap();

    run_tx(&store, &["delete-month", "--year", "2024", "--month", "March"]).unwrap();

    let txs = store::load_transactions(&store).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].month, Month::April);
}

#[test]
fn clear_removes_everything() {
    let store = MemoryStore::new();
    run_tx(
        &store,
        &[
            "add", "--year", "2024", "--month", "March", "--kind", "income", "--amount", "100",
        ],
    )
    .unwrap();
    run_tx(&store, &["clear"]).unwrap();
    assert!(store::load_transactions(&store).unwrap().is_empty());
}
