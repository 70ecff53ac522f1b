// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CostGroup, CostGroupKind, Frequency, OneTimeCost, RecurringCost};
use crate::planning;
use crate::store::{self, Store};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};
use anyhow::{Result, anyhow, bail};
use uuid::Uuid;

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("remove", sub)) => remove(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn group_arg(sub: &clap::ArgMatches) -> Result<CostGroupKind> {
    sub.get_one::<String>("group")
        .ok_or_else(|| anyhow!("Missing --group"))?
        .parse()
        .map_err(|e: String| anyhow!(e))
}

fn id_arg(sub: &clap::ArgMatches) -> Result<Uuid> {
    sub.get_one::<String>("id")
        .ok_or_else(|| anyhow!("Missing --id"))?
        .parse()
        .map_err(|e| anyhow!("Invalid id: {}", e))
}

fn add(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let group = group_arg(sub)?;
    let name = sub
        .get_one::<String>("name")
        .ok_or_else(|| anyhow!("Missing --name"))?
        .trim()
        .to_string();
    if name.is_empty() {
        bail!("Cost name must not be empty");
    }
    let amount = parse_amount(
        sub.get_one::<String>("amount")
            .ok_or_else(|| anyhow!("Missing --amount"))?,
    )?;
    let frequency = sub
        .get_one::<String>("frequency")
        .map(|s| s.parse::<Frequency>())
        .transpose()
        .map_err(|e: String| anyhow!(e))?;

    let mut budget = store::load_planning_budget(store)?;
    let id = Uuid::new_v4();
    match frequency {
        Some(frequency) => {
            budget.group_mut(group).recurring.push(RecurringCost {
                id,
                name: name.clone(),
                amount,
                frequency,
            });
            println!(
                "Added recurring '{}' ({} {}) to {} [{}]",
                name,
                fmt_money(&amount),
                frequency,
                group,
                id
            );
        }
        None => {
            budget.group_mut(group).one_time.push(OneTimeCost {
                id,
                name: name.clone(),
                amount,
            });
            println!(
                "Added one-time '{}' ({}) to {} [{}]",
                name,
                fmt_money(&amount),
                group,
                id
            );
        }
    }
    store::save_planning_budget(store, &budget)?;
    Ok(())
}

fn edit(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let group = group_arg(sub)?;
    let id = id_arg(sub)?;
    let name = sub.get_one::<String>("name").map(|s| s.trim().to_string());
    let amount = sub
        .get_one::<String>("amount")
        .map(|s| parse_amount(s))
        .transpose()?;
    let frequency = sub
        .get_one::<String>("frequency")
        .map(|s| s.parse::<Frequency>())
        .transpose()
        .map_err(|e: String| anyhow!(e))?;

    let mut budget = store::load_planning_budget(store)?;
    let costs = budget.group_mut(group);

    if let Some(cost) = costs.recurring.iter_mut().find(|c| c.id == id) {
        if let Some(name) = name {
            cost.name = name;
        }
        if let Some(amount) = amount {
            cost.amount = amount;
        }
        if let Some(frequency) = frequency {
            cost.frequency = frequency;
        }
        println!("Updated recurring cost {}", id);
    } else if let Some(cost) = costs.one_time.iter_mut().find(|c| c.id == id) {
        if frequency.is_some() {
            bail!("One-time costs have no frequency");
        }
        if let Some(name) = name {
            cost.name = name;
        }
        if let Some(amount) = amount {
            cost.amount = amount;
        }
        println!("Updated one-time cost {}", id);
    } else {
        bail!("No cost with id {} in {}", id, group);
    }
    store::save_planning_budget(store, &budget)?;
    Ok(())
}

fn remove(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let group = group_arg(sub)?;
    let id = id_arg(sub)?;
    let mut budget = store::load_planning_budget(store)?;
    let costs = budget.group_mut(group);
    let before = costs.recurring.len() + costs.one_time.len();
    costs.recurring.retain(|c| c.id != id);
    costs.one_time.retain(|c| c.id != id);
    if costs.recurring.len() + costs.one_time.len() == before {
        bail!("No cost with id {} in {}", id, group);
    }
    store::save_planning_budget(store, &budget)?;
    println!("Removed cost {} from {}", id, group);
    Ok(())
}

fn show(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let budget = store::load_planning_budget(store)?;
    if maybe_print_json(json_flag, jsonl_flag, &budget)? {
        return Ok(());
    }
    render_group("Needs", &budget.needs);
    render_group("Wants", &budget.wants);
    Ok(())
}

fn render_group(title: &str, group: &CostGroup) {
    println!("{}", title);
    let mut rows: Vec<Vec<String>> = group
        .recurring
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                fmt_money(&c.amount),
                c.frequency.to_string(),
                fmt_money(&planning::monthly_equivalent(c)),
            ]
        })
        .collect();
    rows.extend(group.one_time.iter().map(|c| {
        vec![
            c.id.to_string(),
            c.name.clone(),
            fmt_money(&c.amount),
            "one-time".to_string(),
            String::new(),
        ]
    }));
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Amount", "Frequency", "Monthly"], rows)
    );
    println!(
        "Monthly recurring: {}   One-time: {}\n",
        fmt_money(&planning::total_monthly_recurring(group)),
        fmt_money(&planning::total_one_time(group))
    );
}
