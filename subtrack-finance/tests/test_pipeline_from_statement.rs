use chrono::NaiveDate;
use rust_decimal::Decimal;
use subtrack_core::{Category, YearMonth};
use subtrack_finance::{
    Analyzer, CategoryRules, SubscriptionDetector, aggregate_by_month, compare_to_budget,
};
use subtrack_ingest::{LineParserConfig, StatementExtractor, parse_manual_entries};

const STATEMENT_PAGES: [&str; 2] = [
    r#"
Account Statement                              Period: 1 Jan, 2025 - 28 Feb, 2025
Date            Description                                 Amount       Balance
3 Jan, 2025     NETFLIX.COM SUBSCRIPTION                    -1,200.00
9 Jan, 2025     AMAZON PRIME VIDEO                          -500.00     48,300.00
12 Jan, 2025    K-ELECTRIC BILL                           -4,250.75
"#,
    r#"
Date            Description                                 Amount       Balance
14 Feb, 2025    NETFLIX.COM SUBSCRIPTION - 1,200.00
30 Feb, 2025    SPOTIFY                                     -349.00
20 Feb, 2025    PATREON* MEMBERSHIP                          750.00
Closing Balance                                                          41,000.00
"#,
];

/// Statement text → transactions → classified report.
#[test]
fn test_statement_to_report() {
    let extractor = StatementExtractor::new(LineParserConfig::default()).unwrap();
    let txns = extractor.extract(STATEMENT_PAGES);

    // header line has two dates but no amount; 30 Feb is not a date
    assert_eq!(txns.len(), 5);
    assert_eq!(txns[3].date, NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
    assert_eq!(txns[3].description, "NETFLIX.COM SUBSCRIPTION -");
    assert_eq!(txns[3].amount, Decimal::new(120000, 2));
    assert_eq!(txns[0].amount, Decimal::new(-120000, 2));

    let report = Analyzer::default().analyze(&txns, Decimal::new(1500, 0));
    let netflix = &report.transactions[3];
    assert_eq!(netflix.category, Category::Entertainment);
    assert!(netflix.is_subscription);

    // running balance is the rightmost amount on the Amazon row
    assert_eq!(report.transactions[1].amount, Decimal::new(4830000, 2));
    assert_eq!(report.transactions[2].category, Category::Utilities);

    let subs: Vec<&str> = report
        .subscriptions
        .iter()
        .map(|s| s.description.as_str())
        .collect();
    assert_eq!(
        subs,
        vec![
            "NETFLIX.COM SUBSCRIPTION",
            "AMAZON PRIME VIDEO",
            "NETFLIX.COM SUBSCRIPTION -",
            "PATREON* MEMBERSHIP",
        ]
    );
    // Patreon is a subscription but has no category keyword
    assert_eq!(report.subscriptions[3].category, Category::Other);
}

#[test]
fn test_manual_entries_against_budget() {
    let txns = parse_manual_entries(
        "2025-01-03, Hulu, 100\n2025-01-17, Hulu, 50\n2025-02-03, Disney+ Hotstar, 900\n",
    );
    let monthly = aggregate_by_month(&txns);
    let jan = YearMonth::new(2025, 1).unwrap();
    let feb = YearMonth::new(2025, 2).unwrap();
    assert_eq!(monthly.len(), 2);
    assert_eq!((monthly[0].month, monthly[0].total), (jan, Decimal::new(150, 0)));
    assert_eq!((monthly[1].month, monthly[1].total), (feb, Decimal::new(900, 0)));

    let exceeded: Vec<YearMonth> = compare_to_budget(&monthly, Decimal::new(120, 0))
        .into_iter()
        .filter(|s| s.exceeded)
        .map(|s| s.month)
        .collect();
    assert_eq!(exceeded, vec![jan, feb]);

    // equal to budget is not exceeded; one paisa over is
    let at_budget = compare_to_budget(&monthly, Decimal::new(150, 0));
    assert!(!at_budget[0].exceeded);
    let just_under = compare_to_budget(&monthly, Decimal::new(14999, 2));
    assert!(just_under[0].exceeded);
}

#[test]
fn test_independent_keyword_tables() {
    let rules = CategoryRules::default();
    let detector = SubscriptionDetector::new(&["gym"]);
    let analyzer = Analyzer::new(rules, detector, Default::default());

    let txns = parse_manual_entries("2025-03-01, Netflix, 1200\n2025-03-02, Gym membership, 3000\n");
    let rows = analyzer.classify(&txns);
    assert_eq!(rows[0].category, Category::Entertainment);
    assert!(!rows[0].is_subscription);
    assert_eq!(rows[1].category, Category::Other);
    assert!(rows[1].is_subscription);
}

#[test]
fn test_report_serializes_to_json() {
    let txns = parse_manual_entries("2025-01-03, Spotify, 349\n");
    let report = Analyzer::default().analyze(&txns, Decimal::new(5000, 0));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["currency"], "PKR");
    assert_eq!(json["subscriptions"][0]["Description"], "Spotify");
    assert_eq!(json["category_spend"][0]["category"], "entertainment");
    assert_eq!(json["over_budget"], false);
}
