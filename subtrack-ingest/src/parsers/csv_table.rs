//! CSV transaction tables.
//!
//! Expected header (column order free, extra columns ignored):
//! Date,Description,Amount

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;
use subtrack_core::Transaction;
use tracing::{debug, info};

use crate::dates::{parse_amount_lenient, parse_date_lenient};

struct Columns {
    date: usize,
    description: usize,
    amount: usize,
}

fn locate_columns(headers: &csv::StringRecord) -> Result<Columns> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };

    match (find("date"), find("description"), find("amount")) {
        (Some(date), Some(description), Some(amount)) => Ok(Columns {
            date,
            description,
            amount,
        }),
        _ => bail!(
            "CSV must have Date, Description and Amount columns (found: {})",
            headers.iter().collect::<Vec<_>>().join(", ")
        ),
    }
}

/// Parse a CSV file of transactions.
pub fn parse_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_transactions_csv(file).with_context(|| format!("reading {}", path.display()))
}

/// Read transactions from any CSV source. Rows whose date or amount do not
/// parse are skipped.
pub fn read_transactions_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = locate_columns(rdr.headers()?)?;
    let mut txns = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in rdr.records().enumerate() {
        let record = result?;

        let date = record.get(columns.date).and_then(parse_date_lenient);
        let amount = record.get(columns.amount).and_then(parse_amount_lenient);

        let (Some(date), Some(amount)) = (date, amount) else {
            skipped += 1;
            debug!(row = i + 2, "skipping CSV row with unparseable date or amount");
            continue;
        };

        let description = record.get(columns.description).unwrap_or("").to_string();
        txns.push(Transaction::new(date, description, amount));
    }

    info!(kept = txns.len(), skipped, "read CSV transactions");
    Ok(txns)
}
