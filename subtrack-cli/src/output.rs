//! Plain-text rendering of a spending report, and CSV export.

use anyhow::{Context, Result};
use std::path::Path;
use subtrack_core::{ClassifiedTransaction, format_amount};
use subtrack_finance::SpendingReport;

const DESCRIPTION_WIDTH: usize = 40;

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub fn render_report(report: &SpendingReport) -> String {
    let money = |v| format_amount(v, &report.currency);
    let mut out = String::new();

    out.push_str(&format!(
        "Parsed {} transactions ({} subscriptions)\n\n",
        report.transactions.len(),
        report.subscriptions.len()
    ));

    if report.subscriptions.is_empty() {
        out.push_str("No subscription charges found.\n");
    } else {
        out.push_str("## Subscriptions\n\n");
        out.push_str(&format!(
            "{:<12} {:<14} {:>16}  {}\n",
            "Date", "Category", "Amount", "Description"
        ));
        for t in &report.subscriptions {
            out.push_str(&format!(
                "{:<12} {:<14} {:>16}  {}\n",
                t.date.format("%Y-%m-%d").to_string(),
                t.category.label(),
                money(t.amount),
                truncate(&t.description, DESCRIPTION_WIDTH)
            ));
        }
    }

    out.push_str(&format!(
        "\nTotal Subscription Spending: {}\n",
        money(report.subscription_total)
    ));
    if report.over_budget {
        out.push_str(&format!(
            "You have exceeded your budget of {}!\n",
            money(report.budget)
        ));
    } else {
        out.push_str(&format!(
            "You are within your budget of {}.\n",
            money(report.budget)
        ));
    }

    if !report.budget_status.is_empty() {
        out.push_str("\n## Monthly Subscription Spending\n\n");
        for s in &report.budget_status {
            let mark = if s.exceeded { "  over budget" } else { "" };
            out.push_str(&format!("{:<10} {:>16}{}\n", s.month.to_string(), money(s.total), mark));
        }
    }

    if !report.category_spend.is_empty() {
        out.push_str("\n## Spending by Category\n\n");
        for c in &report.category_spend {
            out.push_str(&format!("{:<14} {:>16}\n", c.category.label(), money(c.total)));
        }
    }

    out
}

/// Write the classified table as `Date,Description,Amount,Category,is_subscription`.
pub fn export_csv(rows: &[ClassifiedTransaction], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
