use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a batch of transactions came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementSource {
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "manual")]
    Manual,
}

/// Raw output of the line parser, before the date text is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Matched date text, e.g. "14 Feb, 2025"
    pub date_text: String,
    pub description: String,
    /// Rightmost amount on the line, thousands separators stripped
    pub amount: Decimal,
}
