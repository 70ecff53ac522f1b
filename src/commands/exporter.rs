// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{self, Store};
use anyhow::{Result, anyhow, bail};

pub fn handle(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .ok_or_else(|| anyhow!("Missing --format"))?
        .to_lowercase();
    let out = sub
        .get_one::<String>("out")
        .ok_or_else(|| anyhow!("Missing --out"))?;

    let txs = store::load_transactions(store)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "year", "month", "kind", "amount"])?;
            for t in &txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.year.to_string(),
                    t.month.to_string(),
                    t.kind.to_string(),
                    t.amount.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transaction(s) to {}", txs.len(), out);
    Ok(())
}
