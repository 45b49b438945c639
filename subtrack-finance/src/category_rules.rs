//! Deterministic category rules mapping transaction descriptions to a
//! spending [`Category`].
//!
//! Rules are checked in table order and the first one with a matching keyword
//! wins. Matching is a case-insensitive substring test, so "electricity"
//! matches the "electric" keyword.

use serde::{Deserialize, Serialize};
use subtrack_core::{CategorizedTransaction, Category, Transaction, TransactionLike};

/// Keywords that put a description into one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new<S: AsRef<str>>(category: Category, keywords: &[S]) -> Self {
        Self {
            category,
            keywords: normalize_keywords(keywords),
        }
    }

    fn matches(&self, lowered_description: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowered_description.contains(k.as_str()))
    }
}

/// Lower-case keywords and drop blank ones (an empty keyword would match
/// every description).
pub(crate) fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Ordered keyword table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::new(vec![
            CategoryRule::new(
                Category::Entertainment,
                &["netflix", "spotify", "youtube", "disney+"],
            ),
            CategoryRule::new(Category::Shopping, &["amazon", "ebay"]),
            CategoryRule::new(Category::Utilities, &["electric", "water", "internet"]),
        ])
    }
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| CategoryRule::new(r.category, r.keywords.as_slice()))
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Categories in table order, then every category the table never names
    /// (`Other` included) in enum order.
    pub fn category_order(&self) -> Vec<Category> {
        let mut order: Vec<Category> = Vec::with_capacity(Category::ALL.len());
        let named = self.rules.iter().map(|r| r.category);
        for category in named.chain(Category::ALL) {
            if !order.contains(&category) {
                order.push(category);
            }
        }
        order
    }

    /// Category for a description; `Other` when nothing matches.
    pub fn categorize(&self, description: &str) -> Category {
        let desc = description.to_lowercase();
        self.rules
            .iter()
            .find(|r| r.matches(&desc))
            .map(|r| r.category)
            .unwrap_or_default()
    }

    pub fn categorize_transaction(&self, txn: &Transaction) -> CategorizedTransaction {
        CategorizedTransaction {
            category: self.categorize(txn.description()),
            transaction: txn.clone(),
        }
    }

    pub fn categorize_all(&self, txns: &[Transaction]) -> Vec<CategorizedTransaction> {
        txns.iter().map(|t| self.categorize_transaction(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn txn(desc: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
            desc,
            Decimal::new(100, 0),
        )
    }

    #[test]
    fn test_netflix_is_entertainment() {
        let rules = CategoryRules::default();
        assert_eq!(
            rules.categorize("NETFLIX.COM SUBSCRIPTION -"),
            Category::Entertainment
        );
        assert_eq!(rules.categorize("Disney+ Hotstar"), Category::Entertainment);
    }

    #[test]
    fn test_shopping_and_utilities() {
        let rules = CategoryRules::default();
        assert_eq!(rules.categorize("AMAZON MKTPLACE"), Category::Shopping);
        assert_eq!(rules.categorize("ebay order 991"), Category::Shopping);
        assert_eq!(rules.categorize("K-Electricity bill"), Category::Utilities);
        assert_eq!(rules.categorize("PTCL Internet"), Category::Utilities);
    }

    #[test]
    fn test_unmatched_is_other() {
        let rules = CategoryRules::default();
        assert_eq!(rules.categorize("PATREON* MEMBERSHIP"), Category::Other);
        assert_eq!(rules.categorize(""), Category::Other);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = CategoryRules::default();
        // matches both Entertainment ("youtube") and Utilities ("internet")
        assert_eq!(
            rules.categorize("YouTube via internet bundle"),
            Category::Entertainment
        );
        // matches Shopping ("amazon") and Utilities ("water")
        assert_eq!(rules.categorize("Amazon water filter"), Category::Shopping);
    }

    #[test]
    fn test_custom_rules_are_normalized() {
        let rules = CategoryRules::new(vec![CategoryRule {
            category: Category::Utilities,
            keywords: vec!["  GAS ".to_string(), "".to_string()],
        }]);
        assert_eq!(rules.rules()[0].keywords, vec!["gas".to_string()]);
        assert_eq!(rules.categorize("SNGPL gas bill"), Category::Utilities);
        assert_eq!(rules.categorize("netflix"), Category::Other);
    }

    #[test]
    fn test_category_order_follows_table() {
        assert_eq!(CategoryRules::default().category_order(), Category::ALL.to_vec());

        let rules = CategoryRules::new(vec![
            CategoryRule::new(Category::Utilities, &["ptcl"]),
            CategoryRule::new(Category::Entertainment, &["netflix"]),
            CategoryRule::new(Category::Utilities, &["sngpl"]),
        ]);
        assert_eq!(
            rules.category_order(),
            vec![
                Category::Utilities,
                Category::Entertainment,
                Category::Shopping,
                Category::Other
            ]
        );
    }

    #[test]
    fn test_categorize_all_is_total() {
        let txns = vec![txn("Spotify"), txn("eBay"), txn("Water board"), txn("Rent")];
        let out = CategoryRules::default().categorize_all(&txns);
        let cats: Vec<Category> = out.iter().map(|c| c.category).collect();
        assert_eq!(
            cats,
            vec![
                Category::Entertainment,
                Category::Shopping,
                Category::Utilities,
                Category::Other
            ]
        );
        assert_eq!(out[0].transaction, txns[0]);
    }
}
