// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, Metrics};
use crate::project::{self, NetWorthProjection, Projection, YearPoint};
use crate::store::{self, Store};
use crate::utils::{fmt_money, fmt_rate, maybe_print_json, parse_decimal, pretty_table};
use crate::{models::NetWorthEntry, networth};
use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
struct DashboardView {
    metrics: Metrics,
    roi_pct: Decimal,
    projections: Vec<Projection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    net_worth: Option<NetWorthCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    yearly: Option<Vec<YearPoint>>,
}

#[derive(Serialize)]
struct NetWorthCard {
    total_assets: Decimal,
    total_liabilities: Decimal,
    net_worth: Decimal,
    projections: Vec<NetWorthProjection>,
}

pub fn handle(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let roi = parse_decimal(
        sub.get_one::<String>("roi")
            .ok_or_else(|| anyhow!("Missing --roi"))?,
    )?;
    let with_yearly = sub.get_flag("yearly");

    let txs = store::load_transactions(store)?;
    let balance = store::load_balance(store)?
        .map(|b| b.amount)
        .unwrap_or(Decimal::ZERO);
    let entries = store::load_net_worth_entries(store)?;

    let periods = aggregate::aggregate(&txs);
    let Some(metrics) = aggregate::metrics(&periods, balance) else {
        println!("No data available. Record income and expenses first: nestegg tx add");
        return Ok(());
    };

    let projections = project::project(&metrics, roi);
    let net_worth = networth::latest(&entries).map(|e| net_worth_card(e, &metrics, roi));
    let yearly =
        with_yearly.then(|| project::yearly_series(&metrics, roi, project::YEARLY_SERIES_YEARS));

    let view = DashboardView {
        metrics,
        roi_pct: roi,
        projections,
        net_worth,
        yearly,
    };
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }
    render(&view);
    Ok(())
}

fn net_worth_card(entry: &NetWorthEntry, metrics: &Metrics, roi: Decimal) -> NetWorthCard {
    NetWorthCard {
        total_assets: entry.total_assets,
        total_liabilities: entry.total_liabilities,
        net_worth: entry.net_worth,
        projections: project::project_net_worth(entry.net_worth, metrics.avg_savings, roi),
    }
}

fn render(view: &DashboardView) {
    let m = &view.metrics;
    println!(
        "{}",
        pretty_table(
            &["Metric", "Value"],
            vec![
                vec!["Average income / month".into(), fmt_money(&m.avg_income)],
                vec!["Average expense / month".into(), fmt_money(&m.avg_expense)],
                vec!["Average savings / month".into(), fmt_money(&m.avg_savings)],
                vec!["Savings rate".into(), fmt_rate(&m.savings_rate)],
                vec!["Current balance".into(), fmt_money(&m.current_balance)],
            ],
        )
    );

    println!(
        "\nProjections at {}% yearly return:",
        view.roi_pct.normalize()
    );
    let rows = view
        .projections
        .iter()
        .map(|p| {
            vec![
                p.period.to_string(),
                fmt_money(&p.total_income),
                fmt_money(&p.total_expense),
                fmt_money(&p.total_savings),
                fmt_money(&p.projected_assets),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Period",
                "Total Income",
                "Total Expense",
                "Savings (no ROI)",
                "Projected Assets",
            ],
            rows,
        )
    );

    if let Some(nw) = &view.net_worth {
        println!(
            "\nNet worth: {} (assets {}, liabilities {})",
            fmt_money(&nw.net_worth),
            fmt_money(&nw.total_assets),
            fmt_money(&nw.total_liabilities)
        );
        let rows = nw
            .projections
            .iter()
            .map(|p| {
                vec![
                    p.period.to_string(),
                    fmt_money(&p.projected_savings),
                    fmt_money(&p.projected_net_worth),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Period", "Projected Savings (no ROI)", "Projected Net Worth"],
                rows,
            )
        );
    }

    if let Some(yearly) = &view.yearly {
        println!("\nYear-by-year:");
        let rows = yearly
            .iter()
            .map(|p| {
                vec![
                    p.year.to_string(),
                    fmt_money(&p.cumulative_savings),
                    fmt_money(&p.total_assets),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Year", "Cumulative Savings", "Total Assets"], rows)
        );
    }
}
