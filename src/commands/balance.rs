// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CurrentBalance;
use crate::store::{self, Store};
use crate::utils::{current_period, fmt_money, maybe_print_json, parse_amount};
use anyhow::{Result, anyhow};

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(
        sub.get_one::<String>("amount")
            .ok_or_else(|| anyhow!("Missing --amount"))?,
    )?;
    let (year, month) = current_period()?;
    let balance = CurrentBalance {
        year,
        month,
        amount,
    };
    store::save_balance(store, &balance)?;
    println!("Balance set to {} as of {} {}", fmt_money(&amount), month, year);
    Ok(())
}

fn show(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    match store::load_balance(store)? {
        Some(balance) => {
            if !maybe_print_json(json_flag, jsonl_flag, &balance)? {
                println!(
                    "Current balance: {} (as of {} {})",
                    fmt_money(&balance.amount),
                    balance.month,
                    balance.year
                );
            }
        }
        None => println!("No balance recorded yet."),
    }
    Ok(())
}
