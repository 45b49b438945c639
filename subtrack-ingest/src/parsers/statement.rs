//! Statement extractor: turns per-page document text into transactions.
//!
//! Every line of every page goes through the [`LineParser`]; the matched date
//! text is then validated as a real calendar date. Rows that fail either step
//! are dropped, so the output never carries a placeholder date.

use anyhow::Result;
use subtrack_core::Transaction;
use tracing::{debug, info};

use crate::dates::parse_statement_date;
use crate::parsers::line::{LineParser, LineParserConfig};

#[derive(Debug, Clone)]
pub struct StatementExtractor {
    parser: LineParser,
}

impl StatementExtractor {
    pub fn new(config: LineParserConfig) -> Result<Self> {
        Ok(Self {
            parser: LineParser::new(config)?,
        })
    }

    /// Extract transactions from a sequence of page texts, in document order.
    pub fn extract<I, S>(&self, pages: I) -> Vec<Transaction>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        let mut matched = 0usize;

        for (page_no, page) in pages.into_iter().enumerate() {
            for line in page.as_ref().lines() {
                let Some(parsed) = self.parser.parse_line(line) else {
                    continue;
                };
                matched += 1;

                let Some(date) = parse_statement_date(&parsed.date_text) else {
                    debug!(page = page_no + 1, date = %parsed.date_text, "dropping row with invalid date");
                    continue;
                };

                out.push(Transaction::new(date, parsed.description, parsed.amount));
            }
        }

        info!(matched, kept = out.len(), "extracted statement transactions");
        out
    }

    /// Convenience for text that was never split into pages.
    pub fn extract_text(&self, text: &str) -> Vec<Transaction> {
        self.extract([text])
    }
}
