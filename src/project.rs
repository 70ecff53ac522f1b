// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Forward-looking figures: horizon projections from monthly averages,
//! the 30-year compounding series, and the buy-borrow-die schedule.
//! Everything here is a pure function over already-loaded data.

use crate::aggregate::Metrics;
use rust_decimal::Decimal;
use serde::Serialize;

/// Fixed projection horizons: label and length in months.
pub const HORIZONS: [(&str, u32); 5] = [
    ("1 Year", 12),
    ("3 Years", 36),
    ("5 Years", 60),
    ("10 Years", 120),
    ("30 Years", 360),
];

pub const YEARLY_SERIES_YEARS: u32 = 30;

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub period: &'static str,
    pub months: u32,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Linear accumulation on top of the current balance, no returns.
    pub total_savings: Decimal,
    /// Compounded balance: returns applied each year, then the year's
    /// savings added.
    pub projected_assets: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearPoint {
    pub year: u32,
    pub cumulative_savings: Decimal,
    pub total_assets: Decimal,
}

/// Net-worth-anchored projection: the same horizons, grown from the
/// latest net-worth figure instead of the cash balance. Here the
/// year's savings are added before the return is applied.
#[derive(Debug, Clone, Serialize)]
pub struct NetWorthProjection {
    pub period: &'static str,
    pub years: u32,
    pub projected_savings: Decimal,
    pub projected_net_worth: Decimal,
}

fn growth_factor(roi_pct: Decimal) -> Decimal {
    Decimal::ONE + roi_pct / Decimal::from(100)
}

/// One compounding step per elapsed year: grow, then save.
pub fn projected_assets(
    start: Decimal,
    annual_savings: Decimal,
    roi_pct: Decimal,
    years: u32,
) -> Decimal {
    let factor = growth_factor(roi_pct);
    let mut balance = start;
    for _ in 0..years {
        balance = balance * factor + annual_savings;
    }
    balance
}

/// Net-worth variant: save, then grow.
pub fn projected_net_worth(
    start: Decimal,
    annual_savings: Decimal,
    roi_pct: Decimal,
    years: u32,
) -> Decimal {
    let factor = growth_factor(roi_pct);
    let mut balance = start;
    for _ in 0..years {
        balance = (balance + annual_savings) * factor;
    }
    balance
}

/// Horizon table from monthly averages and an annual return rate.
pub fn project(metrics: &Metrics, roi_pct: Decimal) -> Vec<Projection> {
    let annual_savings = metrics.avg_savings * Decimal::from(12);
    HORIZONS
        .iter()
        .map(|&(period, months)| {
            let m = Decimal::from(months);
            Projection {
                period,
                months,
                total_income: metrics.avg_income * m,
                total_expense: metrics.avg_expense * m,
                total_savings: metrics.avg_savings * m + metrics.current_balance,
                projected_assets: projected_assets(
                    metrics.current_balance,
                    annual_savings,
                    roi_pct,
                    months / 12,
                ),
            }
        })
        .collect()
}

/// Year-by-year series behind the long-range chart: linear cumulative
/// savings next to the compounded asset line.
pub fn yearly_series(metrics: &Metrics, roi_pct: Decimal, years: u32) -> Vec<YearPoint> {
    let annual_savings = metrics.avg_savings * Decimal::from(12);
    let factor = growth_factor(roi_pct);
    let mut total_assets = metrics.current_balance;
    let mut points = Vec::with_capacity(years as usize);
    for year in 1..=years {
        total_assets = total_assets * factor + annual_savings;
        points.push(YearPoint {
            year,
            cumulative_savings: annual_savings * Decimal::from(year) + metrics.current_balance,
            total_assets,
        });
    }
    points
}

/// Horizon table anchored on the latest net-worth entry.
pub fn project_net_worth(
    net_worth: Decimal,
    avg_savings: Decimal,
    roi_pct: Decimal,
) -> Vec<NetWorthProjection> {
    let annual_savings = avg_savings * Decimal::from(12);
    HORIZONS
        .iter()
        .map(|&(period, months)| {
            let years = months / 12;
            NetWorthProjection {
                period,
                years,
                projected_savings: net_worth + annual_savings * Decimal::from(years),
                projected_net_worth: projected_net_worth(
                    net_worth,
                    annual_savings,
                    roi_pct,
                    years,
                ),
            }
        })
        .collect()
}

/// How the yearly draw is sized in the buy-borrow-die schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowMode {
    /// Borrow a fixed percentage of that year's asset value.
    PercentOfAssets(Decimal),
    /// Borrow a fixed monthly income, optionally inflation-adjusted.
    MonthlyIncome(Decimal),
}

#[derive(Debug, Clone)]
pub struct BbdInput {
    pub asset_value: Decimal,
    pub annual_return_pct: Decimal,
    pub interest_rate_pct: Decimal,
    /// LTV ceiling the user considers safe; rows above it are flagged.
    pub ltv_limit_pct: Decimal,
    pub mode: BorrowMode,
    /// Only honored in `MonthlyIncome` mode.
    pub inflation_pct: Option<Decimal>,
    pub years: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BbdYear {
    pub year: u32,
    pub asset_value: Decimal,
    pub amount_borrowed: Decimal,
    pub monthly_borrow: Decimal,
    pub cumulative_borrowed: Decimal,
    /// Cumulative borrowed over asset value, in percent. `None` when
    /// the asset value has reached zero.
    pub ltv_pct: Option<Decimal>,
    pub exceeds_limit: bool,
    pub interest_paid: Decimal,
}

/// Yearly buy-borrow-die schedule. Assets compound at the real return
/// rate `(1 + r) / (1 + i) - 1`; inflation is zero outside income mode
/// and must stay above -100%, which callers enforce at the input
/// boundary.
pub fn buy_borrow_die(input: &BbdInput) -> Vec<BbdYear> {
    let hundred = Decimal::from(100);
    let twelve = Decimal::from(12);
    let annual_return = input.annual_return_pct / hundred;
    let interest_rate = input.interest_rate_pct / hundred;
    let inflation = match input.mode {
        BorrowMode::MonthlyIncome(_) => input.inflation_pct.unwrap_or(Decimal::ZERO) / hundred,
        BorrowMode::PercentOfAssets(_) => Decimal::ZERO,
    };
    let real_factor = (Decimal::ONE + annual_return) / (Decimal::ONE + inflation);
    let inflation_factor = Decimal::ONE + inflation;

    let mut asset_value = input.asset_value;
    let mut cumulative = Decimal::ZERO;
    let mut monthly_income = match input.mode {
        BorrowMode::MonthlyIncome(m) => m,
        BorrowMode::PercentOfAssets(_) => Decimal::ZERO,
    };

    let mut rows = Vec::with_capacity(input.years as usize);
    for year in 1..=input.years {
        asset_value *= real_factor;

        let (amount_borrowed, monthly_borrow) = match input.mode {
            BorrowMode::PercentOfAssets(rate_pct) => {
                let borrowed = asset_value * rate_pct / hundred;
                (borrowed, borrowed / twelve)
            }
            BorrowMode::MonthlyIncome(_) => {
                let monthly = monthly_income;
                // Next year's income keeps pace with inflation.
                monthly_income *= inflation_factor;
                (monthly * twelve, monthly)
            }
        };

        cumulative += amount_borrowed;
        let ltv_pct = if asset_value.is_zero() {
            None
        } else {
            Some(cumulative / asset_value * hundred)
        };
        rows.push(BbdYear {
            year,
            asset_value,
            amount_borrowed,
            monthly_borrow,
            cumulative_borrowed: cumulative,
            ltv_pct,
            exceeds_limit: ltv_pct.is_some_and(|l| l > input.ltv_limit_pct),
            interest_paid: cumulative * interest_rate,
        });
    }
    rows
}
