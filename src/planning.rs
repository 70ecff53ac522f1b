// Copyright (c) 2025 Nestegg Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CostGroup, RecurringCost};
use rust_decimal::Decimal;

/// Monthly-equivalent amount of a recurring cost: the amount spread
/// over the months its frequency covers (quarterly /3, yearly /12).
pub fn monthly_equivalent(cost: &RecurringCost) -> Decimal {
    cost.amount / cost.frequency.months_covered()
}

/// Sum of monthly equivalents over a group's recurring costs.
pub fn total_monthly_recurring(group: &CostGroup) -> Decimal {
    group.recurring.iter().map(monthly_equivalent).sum()
}

/// Plain sum of a group's one-time costs.
pub fn total_one_time(group: &CostGroup) -> Decimal {
    group.one_time.iter().map(|c| c.amount).sum()
}
