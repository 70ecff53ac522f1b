// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::LineItem;
use crate::networth;
use crate::store::{self, Store};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_line_items, pretty_table};
use anyhow::{Result, anyhow, bail};
use chrono::Utc;
use uuid::Uuid;

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Either a category breakdown or a single "Total" line, like the two
/// input modes of the tracker.
fn side_items(
    sub: &clap::ArgMatches,
    breakdown_arg: &str,
    total_arg: &str,
) -> Result<Vec<LineItem>> {
    match (
        sub.get_one::<String>(breakdown_arg),
        sub.get_one::<String>(total_arg),
    ) {
        (Some(_), Some(_)) => bail!(
            "Use either --{} or --{}, not both",
            breakdown_arg,
            total_arg
        ),
        (Some(spec), None) => parse_line_items(spec),
        (None, Some(total)) => Ok(vec![LineItem::new("Total", parse_amount(total)?)]),
        (None, None) => Ok(Vec::new()),
    }
}

fn add(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let assets = side_items(sub, "assets", "total-assets")?;
    let liabilities = side_items(sub, "liabilities", "total-liabilities")?;
    if assets.is_empty() && liabilities.is_empty() {
        bail!("Nothing to save: provide assets and/or liabilities");
    }
    let notes = sub.get_one::<String>("notes").cloned();

    let mut entries = store::load_net_worth_entries(store)?;
    let id = networth::upsert(&mut entries, assets, liabilities, notes, Utc::now());
    store::save_net_worth_entries(store, &entries)?;

    let entry = entries
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| anyhow!("Entry vanished after save"))?;
    println!(
        "Saved entry {} for {}: net worth {} (assets {}, liabilities {})",
        entry.id,
        entry.date.date_naive(),
        fmt_money(&entry.net_worth),
        fmt_money(&entry.total_assets),
        fmt_money(&entry.total_liabilities)
    );
    Ok(())
}

fn list(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = store::load_net_worth_entries(store)?;
    if entries.is_empty() {
        println!("No net-worth entries yet.");
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &entries)? {
        let rows = entries
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.date.date_naive().to_string(),
                    fmt_money(&e.total_assets),
                    fmt_money(&e.total_liabilities),
                    fmt_money(&e.net_worth),
                    e.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Assets", "Liabilities", "Net Worth", "Notes"],
                rows,
            )
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
    let mut entries = store::load_net_worth_entries(store)?;
    if !networth::delete(&mut entries, id) {
        bail!("No entry with id {}", id);
    }
    store::save_net_worth_entries(store, &entries)?;
    println!("Deleted entry {}", id);
    Ok(())
}
