//! Transaction record types shared by ingestion and classification

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed financial movement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    /// Calendar date of the movement (always valid; unparseable rows never get here)
    pub date: NaiveDate,
    /// Merchant / narrative text with dates and amounts stripped
    pub description: String,
    /// Signed as written in the source. Unsigned amounts are positive.
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    /// Returns true if the source marked this amount as a debit (negative)
    pub fn is_debit(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

/// Coarse spending label assigned by keyword match.
///
/// Variant order is the rule table order, so sorting by `Category` gives the
/// same order the categorizer checks them in. `Other` always sorts last.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Category {
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "utilities")]
    Utilities,
    #[default]
    #[serde(rename = "other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A transaction plus the single category it was assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorizedTransaction {
    pub transaction: Transaction,
    pub category: Category,
}

/// Full output row: `Date, Description, Amount, Category, is_subscription`.
///
/// Kept flat so it serializes straight into a CSV table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifiedTransaction {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Category")]
    pub category: Category,
    pub is_subscription: bool,
}

impl ClassifiedTransaction {
    pub fn new(txn: &Transaction, category: Category, is_subscription: bool) -> Self {
        Self {
            date: txn.date,
            description: txn.description.clone(),
            amount: txn.amount,
            category,
            is_subscription,
        }
    }
}

/// Read access to the fields aggregation and detection need.
pub trait TransactionLike {
    fn date(&self) -> NaiveDate;
    fn description(&self) -> &str;
    fn amount(&self) -> Decimal;
}

/// Anything carrying an assigned category
pub trait HasCategory: TransactionLike {
    fn category(&self) -> Category;
}

impl TransactionLike for Transaction {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl TransactionLike for CategorizedTransaction {
    fn date(&self) -> NaiveDate {
        self.transaction.date
    }
    fn description(&self) -> &str {
        &self.transaction.description
    }
    fn amount(&self) -> Decimal {
        self.transaction.amount
    }
}

impl HasCategory for CategorizedTransaction {
    fn category(&self) -> Category {
        self.category
    }
}

impl TransactionLike for ClassifiedTransaction {
    fn date(&self) -> NaiveDate {
        self.date
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl HasCategory for ClassifiedTransaction {
    fn category(&self) -> Category {
        self.category
    }
}
