// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::aggregate::{aggregate, metrics};
use nestegg::models::{Month, Transaction, TxKind};
use rust_decimal::Decimal;
use uuid::Uuid;

fn tx(year: i32, month: Month, kind: TxKind, amount: &str) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        year,
        month,
        kind,
        amount: amount.parse().unwrap(),
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn aggregates_example_scenario_in_descending_order() {
    let txs = vec![
        tx(2024, Month::January, TxKind::Income, "3000"),
        tx(2024, Month::January, TxKind::Expense, "1200"),
        tx(2024, Month::February, TxKind::Income, "3000"),
        tx(2024, Month::February, TxKind::Expense, "1500"),
    ];
    let periods = aggregate(&txs);
    assert_eq!(periods.len(), 2);

    assert_eq!(periods[0].year, 2024);
    assert_eq!(periods[0].month, Month::February);
    assert_eq!(periods[0].income, dec("3000"));
    assert_eq!(periods[0].expense, dec("1500"));
    assert_eq!(periods[0].net, dec("1500"));

    assert_eq!(periods[1].month, Month::January);
    assert_eq!(periods[1].income, dec("3000"));
    assert_eq!(periods[1].expense, dec("1200"));
    assert_eq!(periods[1].net, dec("1800"));
}

#[test]
fn sorts_years_before_months() {
    let txs = vec![
        tx(2023, Month::December, TxKind::Income, "1"),
        tx(2024, Month::January, TxKind::Income, "2"),
        tx(2023, Month::March, TxKind::Income, "3"),
    ];
    let periods = aggregate(&txs);
    let order: Vec<(i32, Month)> = periods.iter().map(|p| (p.year, p.month)).collect();
    assert_eq!(
        order,
        vec![
            (2024, Month::January),
            (2023, Month::December),
            (2023, Month::March),
        ]
    );
}

#[test]
fn preserves_income_and_expense_sums() {
    let txs = vec![
        tx(2024, Month::January, TxKind::Income, "100.25"),
        tx(2024, Month::January, TxKind::Income, "49.75"),
        tx(2024, Month::March, TxKind::Income, "200"),
        tx(2024, Month::January, TxKind::Expense, "30.10"),
        tx(2024, Month::March, TxKind::Expense, "70.90"),
    ];
    let periods = aggregate(&txs);

    let income_in: Decimal = txs
        .iter()
        .filter(|t| t.kind == TxKind::Income)
        .map(|t| t.amount)
        .sum();
    let expense_in: Decimal = txs
        .iter()
        .filter(|t| t.kind == TxKind::Expense)
        .map(|t| t.amount)
        .sum();
    let income_out: Decimal = periods.iter().map(|p| p.income).sum();
    let expense_out: Decimal = periods.iter().map(|p| p.expense).sum();

    assert_eq!(income_in, income_out);
    assert_eq!(expense_in, expense_out);
    for p in &periods {
        assert_eq!(p.net, p.income - p.expense);
    }
}

#[test]
fn single_sided_period_appears_with_zero_counterpart() {
    let periods = aggregate(&[tx(2024, Month::May, TxKind::Expense, "42")]);
    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].income, Decimal::ZERO);
    assert_eq!(periods[0].expense, dec("42"));
    assert_eq!(periods[0].net, dec("-42"));
}

#[test]
fn empty_input_yields_no_periods_and_no_metrics() {
    let periods = aggregate(&[]);
    assert!(periods.is_empty());
    assert!(metrics(&periods, Decimal::ZERO).is_none());
}

#[test]
fn metrics_match_example_scenario() {
    let txs = vec![
        tx(2024, Month::January, TxKind::Income, "3000"),
        tx(2024, Month::January, TxKind::Expense, "1200"),
        tx(2024, Month::February, TxKind::Income, "3000"),
        tx(2024, Month::February, TxKind::Expense, "1500"),
    ];
    let m = metrics(&aggregate(&txs), dec("500")).unwrap();
    assert_eq!(m.avg_income, dec("3000"));
    assert_eq!(m.avg_expense, dec("1350"));
    assert_eq!(m.avg_savings, dec("1650"));
    assert_eq!(m.savings_rate, Some(dec("55")));
    assert_eq!(m.current_balance, dec("500"));
}

#[test]
fn savings_rate_is_undefined_without_income() {
    let txs = vec![tx(2024, Month::April, TxKind::Expense, "100")];
    let m = metrics(&aggregate(&txs), Decimal::ZERO).unwrap();
    assert_eq!(m.avg_income, Decimal::ZERO);
    assert_eq!(m.savings_rate, None);
}
