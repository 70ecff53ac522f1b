// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::project::{self, BbdInput, BorrowMode};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_decimal, pretty_table};
use anyhow::{Result, anyhow, bail};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("bbd", sub)) => bbd(sub)?,
        Some(("growth", sub)) => growth(sub)?,
        _ => {}
    }
    Ok(())
}

fn required_decimal(sub: &clap::ArgMatches, name: &str) -> Result<Decimal> {
    parse_decimal(
        sub.get_one::<String>(name)
            .ok_or_else(|| anyhow!("Missing --{}", name))?,
    )
}

fn bbd(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mode = match (
        sub.get_one::<String>("borrow-rate"),
        sub.get_one::<String>("monthly-income"),
    ) {
        (Some(_), Some(_)) => bail!("Use either --borrow-rate or --monthly-income, not both"),
        (Some(rate), None) => BorrowMode::PercentOfAssets(parse_decimal(rate)?),
        (None, Some(income)) => BorrowMode::MonthlyIncome(parse_amount(income)?),
        (None, None) => bail!("One of --borrow-rate or --monthly-income is required"),
    };
    let inflation = sub
        .get_one::<String>("inflation")
        .map(|s| parse_decimal(s))
        .transpose()?;
    if inflation.is_some() && matches!(mode, BorrowMode::PercentOfAssets(_)) {
        bail!("--inflation only applies with --monthly-income");
    }
    if let Some(i) = inflation {
        // -100% would zero the real-growth denominator.
        if i <= Decimal::from(-100) {
            bail!("Inflation must be greater than -100%");
        }
    }

    let input = BbdInput {
        asset_value: parse_amount(
            sub.get_one::<String>("asset-value")
                .ok_or_else(|| anyhow!("Missing --asset-value"))?,
        )?,
        annual_return_pct: required_decimal(sub, "annual-return")?,
        interest_rate_pct: required_decimal(sub, "interest-rate")?,
        ltv_limit_pct: required_decimal(sub, "ltv-limit")?,
        mode,
        inflation_pct: inflation,
        years: *sub
            .get_one::<u32>("years")
            .ok_or_else(|| anyhow!("Missing --years"))?,
    };

    let rows = project::buy_borrow_die(&input);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                let ltv = match r.ltv_pct {
                    Some(l) if r.exceeds_limit => format!("{:.2}% !", l),
                    Some(l) => format!("{:.2}%", l),
                    None => "n/a".to_string(),
                };
                vec![
                    r.year.to_string(),
                    fmt_money(&r.asset_value),
                    fmt_money(&r.amount_borrowed),
                    fmt_money(&r.monthly_borrow),
                    fmt_money(&r.cumulative_borrowed),
                    ltv,
                    fmt_money(&r.interest_paid),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Year",
                    "Asset Value",
                    "Borrowed",
                    "Monthly",
                    "Cumulative",
                    "LTV",
                    "Interest",
                ],
                data,
            )
        );
        if rows.iter().any(|r| r.exceeds_limit) {
            println!("! LTV exceeds the configured limit");
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct GrowthRow {
    year: u32,
    balance: Decimal,
}

fn growth(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let start = parse_amount(
        sub.get_one::<String>("balance")
            .ok_or_else(|| anyhow!("Missing --balance"))?,
    )?;
    let roi = required_decimal(sub, "roi")?;
    let annual_savings = parse_decimal(
        sub.get_one::<String>("annual-savings")
            .ok_or_else(|| anyhow!("Missing --annual-savings"))?,
    )?;
    let years = *sub
        .get_one::<u32>("years")
        .ok_or_else(|| anyhow!("Missing --years"))?;

    let mut rows = Vec::with_capacity(years as usize);
    for year in 1..=years {
        rows.push(GrowthRow {
            year,
            balance: project::projected_assets(start, annual_savings, roi, year),
        });
    }
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| vec![r.year.to_string(), fmt_money(&r.balance)])
            .collect();
        println!("{}", pretty_table(&["Year", "Balance"], data));
    }
    Ok(())
}
