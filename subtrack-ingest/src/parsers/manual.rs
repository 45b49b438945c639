//! Manual entry: one transaction per line, `Date, Description, Amount`.

use subtrack_core::Transaction;
use tracing::{debug, info};

use crate::dates::{parse_amount_lenient, parse_date_lenient};

fn parse_entry(line: &str) -> Option<Transaction> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [date, description, amount] = fields.as_slice() else {
        return None;
    };

    Some(Transaction::new(
        parse_date_lenient(date)?,
        *description,
        parse_amount_lenient(amount)?,
    ))
}

/// Parse free-text entries. Blank lines are ignored; lines that do not have
/// exactly three fields, or whose date or amount do not parse, are dropped.
pub fn parse_manual_entries(text: &str) -> Vec<Transaction> {
    let mut out = Vec::new();
    let mut dropped = 0usize;

    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_entry(line) {
            Some(txn) => out.push(txn),
            None => {
                dropped += 1;
                debug!(line = i + 1, "dropping malformed manual entry");
            }
        }
    }

    info!(kept = out.len(), dropped, "parsed manual entries");
    out
}
