//! Date and amount parsing shared by the ingestion paths.
//!
//! Statement lines use one fixed date layout (`14 Feb, 2025`). CSV and manual
//! entry go through the lenient parsers, which try a short list of common
//! layouts and give up (returning `None`) on anything else.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Layout of the date text matched on statement lines.
pub const STATEMENT_DATE_FORMAT: &str = "%d %b, %Y";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    STATEMENT_DATE_FORMAT,
    "%d %b %Y",
    "%b %d, %Y",
    "%d-%b-%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse statement date text such as "14 Feb, 2025".
///
/// Month names are matched case-insensitively. Impossible dates
/// ("31 Feb, 2025") and unknown month names return `None`.
pub fn parse_statement_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), STATEMENT_DATE_FORMAT).ok()
}

/// Parse a date in any of the accepted layouts.
///
/// Slash dates are month-first (`02/14/2025`).
pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Convert matched amount text ("3,223.87", "-340.00", "+12.00") to a decimal.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(',', "");
    let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}

/// Like [`parse_amount`], but also accepts scientific notation ("1.5e3").
pub fn parse_amount_lenient(s: &str) -> Option<Decimal> {
    parse_amount(s).or_else(|| {
        let cleaned = s.trim().replace(',', "");
        let cleaned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
        Decimal::from_scientific(cleaned).ok()
    })
}
