// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::models::{Month, Transaction, TxKind};
use nestegg::store::{self, MemoryStore};
use nestegg::{cli, commands};
use rust_decimal::Decimal;
use tempfile::tempdir;
use uuid::Uuid;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    let txs = vec![
        Transaction {
            id: Uuid::new_v4(),
            year: 2024,
            month: Month::January,
            kind: TxKind::Income,
            amount: dec("3000"),
        },
        Transaction {
            id: Uuid::new_v4(),
            year: 2024,
            month: Month::January,
            kind: TxKind::Expense,
            amount: dec("1200.50"),
        },
    ];
    store::save_transactions(&store, &txs).unwrap();
    store
}

fn run_export(store: &MemoryStore, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "nestegg", "export", "--format", format, "--out", out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        commands::exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

fn run_import(store: &MemoryStore, file: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(["nestegg", "import", "--file", file]);
    if let Some(("import", import_m)) = matches.subcommand() {
        commands::importer::handle(store, import_m)
    } else {
        panic!("no import subcommand");
    }
}

#[test]
fn csv_export_then_import_preserves_every_record() {
    let source = seeded_store();
    let dir = tempdir().unwrap();
    let path = dir.path().join("txs.csv");
    let path_str = path.to_string_lossy().to_string();

    run_export(&source, "csv", &path_str).unwrap();

    let target = MemoryStore::new();
    run_import(&target, &path_str).unwrap();

    let imported = store::load_transactions(&target).unwrap();
    assert_eq!(imported.len(), 2);
    assert_eq!(imported[0].year, 2024);
    assert_eq!(imported[0].month, Month::January);
    assert_eq!(imported[0].kind, TxKind::Income);
    assert_eq!(imported[0].amount, dec("3000"));
    assert_eq!(imported[1].kind, TxKind::Expense);
    assert_eq!(imported[1].amount, dec("1200.50"));
}

#[test]
fn json_export_writes_pretty_array() {
    let source = seeded_store();
    let dir = tempdir().unwrap();
    let path = dir.path().join("txs.json");
    let path_str = path.to_string_lossy().to_string();

    run_export(&source, "json", &path_str).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["month"], "January");
    assert_eq!(rows[0]["kind"], "Income");
}

#[test]
fn export_rejects_unknown_format() {
    let source = seeded_store();
    let dir = tempdir().unwrap();
    let path = dir.path().join("txs.xml");
    let path_str = path.to_string_lossy().to_string();

    assert!(run_export(&source, "xml", &path_str).is_err());
    assert!(!path.exists());
}

#[test]
fn import_appends_to_existing_transactions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("extra.csv");
    std::fs::write(&path, "year,month,kind,amount\n2023,December,income,99.99\n").unwrap();

    let store = seeded_store();
    run_import(&store, &path.to_string_lossy()).unwrap();

    let txs = store::load_transactions(&store).unwrap();
    assert_eq!(txs.len(), 3);
    assert_eq!(txs[2].year, 2023);
    assert_eq!(txs[2].month, Month::December);
    assert_eq!(txs[2].amount, dec("99.99"));
}

#[test]
fn import_with_a_bad_row_saves_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(
        &path,
        "year,month,kind,amount\n2024,January,income,100\n2024,Janvember,income,50\n",
    )
    .unwrap();

    let store = MemoryStore::new();
    assert!(run_import(&store, &path.to_string_lossy()).is_err());
    assert!(store::load_transactions(&store).unwrap().is_empty());
}

#[test]
fn import_requires_the_amount_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("headerless.csv");
    std::fs::write(&path, "year,month,kind\n2024,January,income\n").unwrap();

    let store = MemoryStore::new();
    assert!(run_import(&store, &path.to_string_lossy()).is_err());
}
