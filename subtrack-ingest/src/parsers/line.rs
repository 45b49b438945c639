//! Single-line statement parser.
//!
//! Expected rows after PDF-to-text (layout varies by bank, only the date and
//! amount shapes are fixed):
//!   14 Feb, 2025   NETFLIX.COM SUBSCRIPTION         - 1,200.00     3,223.87
//!   16 Feb, 2025   K-ELECTRIC BILL PAYMENT            -340.00

use anyhow::Result;
use regex::Regex;

use crate::dates::parse_amount;
use crate::types::ParsedLine;

const DATE_PATTERN: &str = r"\d{1,2} [A-Za-z]{3}, \d{4}";
const SIGNED_AMOUNT_PATTERN: &str = r"[-+]?\d{1,3}(?:,\d{3})*\.\d{2}";
const MINUS_ONLY_AMOUNT_PATTERN: &str = r"-?\d{1,3}(?:,\d{3})*\.\d{2}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParserConfig {
    /// Treat a leading `+` as part of the amount. When false a `+` is left in
    /// the description and the amount is read unsigned.
    pub allow_plus_sign: bool,
}

impl Default for LineParserConfig {
    fn default() -> Self {
        Self {
            allow_plus_sign: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LineParser {
    date_re: Regex,
    amount_re: Regex,
}

impl LineParser {
    pub fn new(config: LineParserConfig) -> Result<Self> {
        let amount_pattern = if config.allow_plus_sign {
            SIGNED_AMOUNT_PATTERN
        } else {
            MINUS_ONLY_AMOUNT_PATTERN
        };

        Ok(Self {
            date_re: Regex::new(DATE_PATTERN)?,
            amount_re: Regex::new(amount_pattern)?,
        })
    }

    /// Extract `(date text, description, amount)` from one line of statement text.
    ///
    /// Returns `None` for lines without a date (headers, footers) and for dated
    /// lines without any amount. When several amounts appear the rightmost one
    /// is taken; the description has the date and every amount removed.
    pub fn parse_line(&self, line: &str) -> Option<ParsedLine> {
        let date_text = self.date_re.find(line)?.as_str();
        let amount_text = self.amount_re.find_iter(line).last()?.as_str();
        let amount = parse_amount(amount_text)?;

        let description = self.strip_amounts(line.replace(date_text, "").trim());

        Some(ParsedLine {
            date_text: date_text.to_string(),
            description,
            amount,
        })
    }

    /// Removing one amount can splice its neighbours into a new one
    /// (`1-5.00.22` leaves `1.22`), so strip until nothing matches.
    fn strip_amounts(&self, text: &str) -> String {
        let mut out = text.to_string();
        loop {
            let next = self.amount_re.replace_all(&out, "").trim().to_string();
            if next == out {
                return out;
            }
            out = next;
        }
    }
}
