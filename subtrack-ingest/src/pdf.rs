//! PDF statement text, one string per page.

use anyhow::{Result, anyhow};
use std::panic;
use std::path::Path;
use tracing::{info, warn};

/// Extract the text of every non-blank page of a PDF.
///
/// Pages are separated by form feeds in the extracted text. A document the
/// extractor chokes on (it panics on some broken internals, such as a font
/// missing from the page resources) is reported as an error.
pub fn read_pdf_pages(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| anyhow!("reading {}: {e}", path.display()))?;
    let text = match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
        Ok(extracted) => {
            extracted.map_err(|e| anyhow!("extracting text from {}: {e}", path.display()))?
        }
        Err(_) => {
            warn!(path = %path.display(), "PDF text extraction panicked");
            return Err(anyhow!("extracting text from {}: malformed PDF", path.display()));
        }
    };

    let pages = split_pages(&text);
    info!(pages = pages.len(), path = %path.display(), "read PDF statement");
    Ok(pages)
}

fn split_pages(text: &str) -> Vec<String> {
    text.split('\u{000C}')
        .filter(|page| !page.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_skips_blank() {
        let pages = split_pages("page one\n\u{000C}  \n\u{000C}page three");
        assert_eq!(pages, vec!["page one\n".to_string(), "page three".to_string()]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_pdf_pages("/definitely/not/here.pdf").unwrap_err();
        assert!(err.to_string().contains("here.pdf"));
    }

    #[test]
    fn test_corrupt_pdf_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"not a pdf at all").unwrap();
        assert!(read_pdf_pages(file.path()).is_err());
    }

    /// One page whose content stream selects a font the page never declares.
    fn pdf_with_undeclared_font() -> Vec<u8> {
        let content = "BT /F9 12 Tf 72 712 Td (14 Feb, 2025 NETFLIX 1,200.00) Tj ET";
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> /Contents 4 0 R >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
        }
        let xref_at = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for off in offsets {
            pdf.push_str(&format!("{off:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }

    #[test]
    fn test_undeclared_font_is_an_error_not_a_panic() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), pdf_with_undeclared_font()).unwrap();

        let path = file.path().to_path_buf();
        let result = panic::catch_unwind(|| read_pdf_pages(&path));
        assert!(result.expect("read_pdf_pages must not panic").is_err());
    }
}
