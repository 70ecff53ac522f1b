// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Calendar month. Ordered January < ... < December so that period
/// sorting can rely on the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// 1-based month number as used by chrono.
    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Month::ALL
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| format!("Unknown month '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Income,
    Expense,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Income => f.write_str("Income"),
            TxKind::Expense => f.write_str("Expense"),
        }
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            _ => Err(format!("Unknown transaction kind '{}' (income|expense)", s)),
        }
    }
}

/// A single income or expense record. Immutable once recorded; removed
/// only individually or by clearing a whole (year, month) bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub year: i32,
    pub month: Month,
    pub kind: TxKind,
    pub amount: Decimal,
}

/// One row of the aggregated period view. Derived on every read, never
/// persisted. `net` always equals `income - expense`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedPeriod {
    pub year: i32,
    pub month: Month,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

/// Singleton balance snapshot; overwritten wholesale on each save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentBalance {
    pub year: i32,
    pub month: Month,
    pub amount: Decimal,
}

/// Last-used (year, month) pair, used to pre-fill `tx add`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LastPeriod {
    pub year: i32,
    pub month: Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Divisor that converts an amount at this frequency into its
    /// monthly equivalent.
    pub fn months_covered(self) -> Decimal {
        match self {
            Frequency::Monthly => Decimal::ONE,
            Frequency::Quarterly => Decimal::from(3),
            Frequency::Yearly => Decimal::from(12),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Monthly => f.write_str("monthly"),
            Frequency::Quarterly => f.write_str("quarterly"),
            Frequency::Yearly => f.write_str("yearly"),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(format!(
                "Unknown frequency '{}' (monthly|quarterly|yearly)",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringCost {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub frequency: Frequency,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneTimeCost {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostGroup {
    pub recurring: Vec<RecurringCost>,
    pub one_time: Vec<OneTimeCost>,
}

/// Planning budget: two top-level groups, each with its own recurring
/// and one-time lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningBudget {
    pub needs: CostGroup,
    pub wants: CostGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostGroupKind {
    Needs,
    Wants,
}

impl fmt::Display for CostGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostGroupKind::Needs => f.write_str("needs"),
            CostGroupKind::Wants => f.write_str("wants"),
        }
    }
}

impl FromStr for CostGroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "needs" => Ok(CostGroupKind::Needs),
            "wants" => Ok(CostGroupKind::Wants),
            _ => Err(format!("Unknown group '{}' (needs|wants)", s)),
        }
    }
}

impl PlanningBudget {
    pub fn group(&self, kind: CostGroupKind) -> &CostGroup {
        match kind {
            CostGroupKind::Needs => &self.needs,
            CostGroupKind::Wants => &self.wants,
        }
    }

    pub fn group_mut(&mut self, kind: CostGroupKind) -> &mut CostGroup {
        match kind {
            CostGroupKind::Needs => &mut self.needs,
            CostGroupKind::Wants => &mut self.wants,
        }
    }
}

/// One asset or liability line. When `category` is "Other", the
/// user-supplied `custom_category` label is the effective category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: Uuid,
    pub category: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_category: Option<String>,
}

impl LineItem {
    pub fn new(category: impl Into<String>, amount: Decimal) -> LineItem {
        LineItem {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            custom_category: None,
        }
    }

    pub fn with_custom(
        category: impl Into<String>,
        custom: impl Into<String>,
        amount: Decimal,
    ) -> LineItem {
        LineItem {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            custom_category: Some(custom.into()),
        }
    }
}

/// Net-worth snapshot. At most one entry per calendar day; a save on a
/// day that already has an entry merges into it, keeping the original
/// id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetWorthEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub assets: Vec<LineItem>,
    pub liabilities: Vec<LineItem>,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
