//! Analysis pipeline: classify a transaction table and summarize spend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use subtrack_core::{ClassifiedTransaction, DEFAULT_CURRENCY, Transaction};
use tracing::info;

use crate::aggregate::{
    BudgetStatus, CategoryAggregate, MonthlyAggregate, aggregate_by_category, aggregate_by_month,
    compare_to_budget, exceeds_budget, total,
};
use crate::category_rules::CategoryRules;
use crate::subscriptions::SubscriptionDetector;

/// How parsed amounts become spend before aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignPolicy {
    /// Sum amounts exactly as parsed
    #[default]
    #[serde(rename = "as-parsed")]
    AsParsed,
    /// Keep only debits (negative amounts) and count them as positive spend
    #[serde(rename = "debits-as-spend")]
    DebitsAsSpend,
}

impl SignPolicy {
    pub fn apply(&self, txns: &[Transaction]) -> Vec<Transaction> {
        match self {
            SignPolicy::AsParsed => txns.to_vec(),
            SignPolicy::DebitsAsSpend => txns
                .iter()
                .filter(|t| t.is_debit())
                .map(|t| Transaction::new(t.date, t.description.clone(), -t.amount))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingReport {
    pub currency: String,
    pub budget: Decimal,
    /// Every transaction with its category and subscription flag
    pub transactions: Vec<ClassifiedTransaction>,
    /// Subscription rows only, in input order
    pub subscriptions: Vec<ClassifiedTransaction>,
    pub subscription_total: Decimal,
    /// Subscription total strictly above the budget
    pub over_budget: bool,
    pub monthly_subscription_spend: Vec<MonthlyAggregate>,
    pub budget_status: Vec<BudgetStatus>,
    pub category_spend: Vec<CategoryAggregate>,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    pub rules: CategoryRules,
    pub detector: SubscriptionDetector,
    pub sign_policy: SignPolicy,
    pub currency: Option<String>,
}

impl Analyzer {
    pub fn new(rules: CategoryRules, detector: SubscriptionDetector, sign_policy: SignPolicy) -> Self {
        Self {
            rules,
            detector,
            sign_policy,
            currency: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Attach a category and subscription flag to every transaction.
    pub fn classify(&self, txns: &[Transaction]) -> Vec<ClassifiedTransaction> {
        txns.iter()
            .map(|t| {
                ClassifiedTransaction::new(
                    t,
                    self.rules.categorize(&t.description),
                    self.detector.is_subscription(&t.description),
                )
            })
            .collect()
    }

    pub fn analyze(&self, txns: &[Transaction], budget: Decimal) -> SpendingReport {
        let spend = self.sign_policy.apply(txns);
        let transactions = self.classify(&spend);
        let subscriptions: Vec<ClassifiedTransaction> = transactions
            .iter()
            .filter(|t| t.is_subscription)
            .cloned()
            .collect();

        let subscription_total = total(&subscriptions);
        let monthly_subscription_spend = aggregate_by_month(&subscriptions);
        let budget_status = compare_to_budget(&monthly_subscription_spend, budget);
        let category_spend = aggregate_by_category(&transactions, &self.rules.category_order());

        info!(
            transactions = transactions.len(),
            subscriptions = subscriptions.len(),
            %subscription_total,
            "analyzed statement"
        );

        SpendingReport {
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            budget,
            over_budget: exceeds_budget(subscription_total, budget),
            transactions,
            subscriptions,
            subscription_total,
            monthly_subscription_spend,
            budget_status,
            category_spend,
        }
    }
}
