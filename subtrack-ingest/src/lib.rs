//! subtrack-ingest: statement ingestion (PDF text, CSV, manual entry) into typed transactions.

pub mod dates;
pub mod parsers;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod types;

pub use parsers::csv_table::{parse_transactions_csv, read_transactions_csv};
pub use parsers::line::{LineParser, LineParserConfig};
pub use parsers::manual::parse_manual_entries;
pub use parsers::statement::StatementExtractor;
#[cfg(feature = "pdf")]
pub use pdf::read_pdf_pages;
pub use types::{ParsedLine, StatementSource};
