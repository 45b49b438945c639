//! Spend aggregation by month and by category, and budget comparison.
//!
//! Sums are plain signed sums. Callers that only want debits filter (or
//! convert) before aggregating; see [`crate::pipeline::SignPolicy`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use subtrack_core::{Category, HasCategory, TransactionLike, YearMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: YearMonth,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: Category,
    pub total: Decimal,
}

/// One month measured against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub month: YearMonth,
    pub total: Decimal,
    pub exceeded: bool,
}

/// Totals per calendar month, oldest first.
pub fn aggregate_by_month<T: TransactionLike>(txns: &[T]) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<YearMonth, Decimal> = BTreeMap::new();
    for t in txns {
        *groups.entry(YearMonth::of(t.date())).or_default() += t.amount();
    }

    groups
        .into_iter()
        .map(|(month, total)| MonthlyAggregate { month, total })
        .collect()
}

/// Totals per category, listed in `order` (see
/// [`CategoryRules::category_order`]). Categories with no transactions are
/// omitted; any category missing from `order` follows in enum order.
///
/// [`CategoryRules::category_order`]: crate::category_rules::CategoryRules::category_order
pub fn aggregate_by_category<T: HasCategory>(
    txns: &[T],
    order: &[Category],
) -> Vec<CategoryAggregate> {
    let mut groups: BTreeMap<Category, Decimal> = BTreeMap::new();
    for t in txns {
        *groups.entry(t.category()).or_default() += t.amount();
    }

    let mut out = Vec::with_capacity(groups.len());
    for category in order {
        if let Some(total) = groups.remove(category) {
            out.push(CategoryAggregate { category: *category, total });
        }
    }
    out.extend(
        groups
            .into_iter()
            .map(|(category, total)| CategoryAggregate { category, total }),
    );
    out
}

pub fn total<T: TransactionLike>(txns: &[T]) -> Decimal {
    txns.iter().map(|t| t.amount()).sum()
}

/// Strict: a total equal to the budget is within it.
pub fn exceeds_budget(total: Decimal, budget: Decimal) -> bool {
    total > budget
}

pub fn compare_to_budget(aggregates: &[MonthlyAggregate], budget: Decimal) -> Vec<BudgetStatus> {
    aggregates
        .iter()
        .map(|a| BudgetStatus {
            month: a.month,
            total: a.total,
            exceeded: exceeds_budget(a.total, budget),
        })
        .collect()
}
