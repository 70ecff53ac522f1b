// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::models::{LastPeriod, Month, Transaction, TxKind};
use crate::store::{self, Store};
use crate::utils::{
    current_period, fmt_money, maybe_print_json, parse_amount, parse_month, pretty_table,
};
use anyhow::{Result, anyhow, bail};
use serde::Serialize;
use uuid::Uuid;

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        Some(("delete-month", sub)) => delete_month(store, sub)?,
        Some(("clear", _)) => clear(store)?,
        _ => {}
    }
    Ok(())
}

/// (year, month) to record against: explicit flags win, then the
/// last-used period, then the current date.
fn resolve_period(
    store: &dyn Store,
    year: Option<i32>,
    month: Option<Month>,
) -> Result<(i32, Month)> {
    let last = store::load_last_period(store)?;
    let (now_year, now_month) = current_period()?;
    let year = year.or(last.map(|p| p.year)).unwrap_or(now_year);
    let month = month.or(last.map(|p| p.month)).unwrap_or(now_month);
    Ok((year, month))
}

fn add(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let year = sub.get_one::<i32>("year").copied();
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let kind: TxKind = sub
        .get_one::<String>("kind")
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| anyhow!(e))?
        .ok_or_else(|| anyhow!("Missing --kind"))?;
    let amount = parse_amount(sub.get_one::<String>("amount").ok_or_else(|| anyhow!("Missing --amount"))?)?;

    let (year, month) = resolve_period(store, year, month)?;

    let mut txs = store::load_transactions(store)?;
    txs.push(Transaction {
        id: Uuid::new_v4(),
        year,
        month,
        kind,
        amount,
    });
    store::save_transactions(store, &txs)?;
    store::save_last_period(store, &LastPeriod { year, month })?;

    println!("Recorded {} of {} for {} {}", kind, fmt_money(&amount), month, year);
    Ok(())
}

#[derive(Serialize)]
struct RawRow {
    id: Uuid,
    year: i32,
    month: Month,
    kind: TxKind,
    amount: String,
}

fn list(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = store::load_transactions(store)?;
    if txs.is_empty() {
        println!("No transactions recorded yet.");
        return Ok(());
    }

    if sub.get_flag("raw") {
        let rows: Vec<RawRow> = txs
            .iter()
            .map(|t| RawRow {
                id: t.id,
                year: t.year,
                month: t.month,
                kind: t.kind,
                amount: fmt_money(&t.amount),
            })
            .collect();
        if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
            let data = rows
                .into_iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.year.to_string(),
                        r.month.to_string(),
                        r.kind.to_string(),
                        r.amount,
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Id", "Year", "Month", "Kind", "Amount"], data)
            );
        }
        return Ok(());
    }

    let periods = aggregate::aggregate(&txs);
    if !maybe_print_json(json_flag, jsonl_flag, &periods)? {
        let data = periods
            .iter()
            .map(|p| {
                vec![
                    format!("{} {}", p.month, p.year),
                    fmt_money(&p.income),
                    fmt_money(&p.expense),
                    fmt_money(&p.net),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Period", "Income", "Expense", "Net"], data)
        );
    }
    Ok(())
}

fn delete(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let id: Uuid = sub
        .get_one::<String>("id")
        .ok_or_else(|| anyhow!("Missing --id"))?
        .parse()
        .map_err(|e| anyhow!("Invalid id: {}", e))?;

    let mut txs = store::load_transactions(store)?;
    let before = txs.len();
    txs.retain(|t| t.id != id);
    if txs.len() == before {
        bail!("No transaction with id {}", id);
    }
    store::save_transactions(store, &txs)?;
    println!("Deleted transaction {}", id);
    Ok(())
}

fn delete_month(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let year = *sub
        .get_one::<i32>("year")
        .ok_or_else(|| anyhow!("Missing --year"))?;
    let month = parse_month(
        sub.get_one::<String>("month")
            .ok_or_else(|| anyhow!("Missing --month"))?,
    )?;

    let mut txs = store::load_transactions(store)?;
    let before = txs.len();
    txs.retain(|t| !(t.year == year && t.month == month));
    let removed = before - txs.len();
    store::save_transactions(store, &txs)?;
    println!("Deleted {} transaction(s) for {} {}", removed, month, year);
    Ok(())
}

fn clear(store: &dyn Store) -> Result<()> {
    store::clear_transactions(store)?;
    println!("Cleared all transactions");
    Ok(())
}
