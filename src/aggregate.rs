// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AggregatedPeriod, Transaction, TxKind};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Groups raw transactions into one row per distinct (year, month),
/// most recent period first. A period that only saw one kind of
/// transaction still appears, with the other total at zero.
pub fn aggregate(transactions: &[Transaction]) -> Vec<AggregatedPeriod> {
    let mut buckets: BTreeMap<(i32, crate::models::Month), (Decimal, Decimal)> = BTreeMap::new();
    for tx in transactions {
        let entry = buckets
            .entry((tx.year, tx.month))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match tx.kind {
            TxKind::Income => entry.0 += tx.amount,
            TxKind::Expense => entry.1 += tx.amount,
        }
    }
    buckets
        .into_iter()
        .rev()
        .map(|((year, month), (income, expense))| AggregatedPeriod {
            year,
            month,
            income,
            expense,
            net: income - expense,
        })
        .collect()
}

/// Monthly averages over the aggregated periods, plus the optional
/// starting balance the projector builds on.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub avg_income: Decimal,
    pub avg_expense: Decimal,
    pub avg_savings: Decimal,
    /// `avg_savings / avg_income * 100`. `None` when average income is
    /// zero: the rate is undefined, not zero.
    pub savings_rate: Option<Decimal>,
    pub current_balance: Decimal,
}

/// Returns `None` for an empty period set; callers treat that as the
/// "no data" state rather than rendering zeroed figures.
pub fn metrics(periods: &[AggregatedPeriod], current_balance: Decimal) -> Option<Metrics> {
    if periods.is_empty() {
        return None;
    }
    let months = Decimal::from(periods.len() as u64);
    let total_income: Decimal = periods.iter().map(|p| p.income).sum();
    let total_expense: Decimal = periods.iter().map(|p| p.expense).sum();
    let total_savings = total_income - total_expense;

    let avg_income = total_income / months;
    let avg_expense = total_expense / months;
    let avg_savings = total_savings / months;
    let savings_rate = if avg_income.is_zero() {
        None
    } else {
        Some(avg_savings / avg_income * Decimal::from(100))
    };

    Some(Metrics {
        avg_income,
        avg_expense,
        avg_savings,
        savings_rate,
        current_balance,
    })
}
