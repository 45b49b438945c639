//! Subscription detection by vendor keyword.
//!
//! This list is separate from the category table: "amazon prime" is a
//! subscription vendor even though the category rules only know "amazon".

use subtrack_core::TransactionLike;

use crate::category_rules::normalize_keywords;

pub const DEFAULT_SUBSCRIPTION_VENDORS: &[&str] = &[
    "netflix",
    "spotify",
    "amazon prime",
    "youtube premium",
    "apple music",
    "hulu",
    "disney+",
    "patreon",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionDetector {
    keywords: Vec<String>,
}

impl Default for SubscriptionDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSCRIPTION_VENDORS)
    }
}

impl SubscriptionDetector {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: normalize_keywords(keywords),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_subscription(&self, description: &str) -> bool {
        let desc = description.to_lowercase();
        self.keywords.iter().any(|k| desc.contains(k.as_str()))
    }

    /// Flagged transactions, in input order.
    pub fn detect<T: TransactionLike + Clone>(&self, txns: &[T]) -> Vec<T> {
        txns.iter()
            .filter(|t| self.is_subscription(t.description()))
            .cloned()
            .collect()
    }
}
