// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::store::{self, Store};
use crate::utils::{parse_amount, parse_month};
use anyhow::{Context, Result, anyhow};
use uuid::Uuid;

/// Appends transactions from a CSV with columns year,month,kind,amount
/// (header row required, extra columns ignored). Ids are regenerated.
pub fn handle(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub
        .get_one::<String>("file")
        .ok_or_else(|| anyhow!("Missing --file"))?;
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("Open CSV at {}", path))?;

    let headers = rdr.headers()?.clone();
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .with_context(|| format!("CSV is missing a '{}' column", name))
    };
    let (year_col, month_col, kind_col, amount_col) =
        (col("year")?, col("month")?, col("kind")?, col("amount")?);

    let mut txs = store::load_transactions(store)?;
    let mut imported = 0usize;
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("Read CSV row {}", idx + 2))?;
        let field = |c: usize| -> Result<&str> {
            record
                .get(c)
                .with_context(|| format!("Row {} is missing column {}", idx + 2, c + 1))
        };
        let year: i32 = field(year_col)?
            .trim()
            .parse()
            .with_context(|| format!("Invalid year on row {}", idx + 2))?;
        let month = parse_month(field(month_col)?)
            .with_context(|| format!("Invalid month on row {}", idx + 2))?;
        let kind = field(kind_col)?
            .parse()
            .map_err(|e: String| anyhow!(e))
            .with_context(|| format!("Invalid kind on row {}", idx + 2))?;
        let amount = parse_amount(field(amount_col)?)
            .with_context(|| format!("Invalid amount on row {}", idx + 2))?;
        txs.push(Transaction {
            id: Uuid::new_v4(),
            year,
            month,
            kind,
            amount,
        });
        imported += 1;
    }
    store::save_transactions(store, &txs)?;
    println!("Imported {} transaction(s) from {}", imported, path);
    Ok(())
}
