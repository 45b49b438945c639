//! subtrack-finance: category rules, subscription detection, spend aggregation and budget checks

pub mod aggregate;
pub mod category_rules;
pub mod pipeline;
pub mod subscriptions;

pub use aggregate::{
    BudgetStatus, CategoryAggregate, MonthlyAggregate, aggregate_by_category, aggregate_by_month,
    compare_to_budget, exceeds_budget, total,
};
pub use category_rules::{CategoryRule, CategoryRules};
pub use pipeline::{Analyzer, SignPolicy, SpendingReport};
pub use subscriptions::{DEFAULT_SUBSCRIPTION_VENDORS, SubscriptionDetector};
