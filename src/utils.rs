// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{LineItem, Month};
use anyhow::{Context, Result, anyhow, bail};
use chrono::{Datelike, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Monetary input boundary: amounts must parse and be non-negative.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let amount = parse_decimal(s)?;
    if amount.is_sign_negative() {
        bail!("Amount '{}' must be non-negative", s);
    }
    Ok(amount)
}

pub fn parse_month(s: &str) -> Result<Month> {
    s.parse::<Month>().map_err(|e| anyhow!(e))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d)
}

/// Two-decimal percentage, or "n/a" for an undefined rate.
pub fn fmt_rate(rate: &Option<Decimal>) -> String {
    match rate {
        Some(r) => format!("{:.2}%", r),
        None => "n/a".to_string(),
    }
}

pub fn current_period() -> Result<(i32, Month)> {
    let now = Utc::now();
    let month = Month::from_number(now.month()).context("Current month out of range")?;
    Ok((now.year(), month))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Parses a breakdown spec like `Cash=5000,Stocks=1200,Other:Art=300`
/// into line items. `Other:<label>` records the label as the custom
/// category.
pub fn parse_line_items(spec: &str) -> Result<Vec<LineItem>> {
    let mut items = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (label, amount_s) = part
            .split_once('=')
            .with_context(|| format!("Invalid line item '{}', expected CATEGORY=AMOUNT", part))?;
        let amount = parse_amount(amount_s)?;
        let item = match label.split_once(':') {
            Some((cat, custom)) if cat.trim().eq_ignore_ascii_case("other") => {
                LineItem::with_custom("Other", custom.trim(), amount)
            }
            _ => LineItem::new(label.trim(), amount),
        };
        items.push(item);
    }
    if items.is_empty() {
        bail!("No line items in '{}'", spec);
    }
    Ok(items)
}
