//! Vendor name extraction for receipts.

use super::patterns::VENDOR_LABEL;
use super::{non_empty_lines, trim_text, ExtractionMatch, FieldExtractor};

/// Shortest line accepted as a vendor name, in characters.
const MIN_VENDOR_LEN: usize = 3;

/// Vendor extractor.
///
/// An explicit label (`Vendor:`, `Store`, `Merchant`, ...) wins; otherwise
/// the first line that looks like a name is used.
pub struct VendorExtractor;

impl VendorExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First line that can serve as a name, skipping leading numeric or
    /// very short lines.
    pub fn header_line<'a>(&self, text: &'a str) -> Option<&'a str> {
        let lines = non_empty_lines(text);
        let first = *lines.first()?;

        if !looks_like_name(first) {
            return lines.into_iter().find(|l| looks_like_name(l));
        }

        Some(first)
    }

    /// Every labeled vendor in the text, in order.
    pub fn labeled(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        VENDOR_LABEL
            .captures_iter(text)
            .filter_map(|caps| {
                let full = caps.get(0)?;
                let value = caps.get(1)?;
                Some(
                    ExtractionMatch::new(trim_text(value.as_str()).to_string(), full.as_str())
                        .with_position(full.start(), full.end()),
                )
            })
            .collect()
    }
}

impl Default for VendorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for VendorExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Labeled vendors first, then the header line.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = self.labeled(text);

        if let Some(line) = self.header_line(text) {
            results.push(ExtractionMatch::new(line.to_string(), line));
        }

        results
    }
}

fn looks_like_name(line: &str) -> bool {
    !line.starts_with(|c: char| c.is_ascii_digit()) && line.chars().count() >= MIN_VENDOR_LEN
}

/// Best-guess vendor for the receipt.
///
/// A labeled capture is only trimmed, so it may be empty or carry OCR
/// noise from the rest of the line.
pub fn extract_vendor(text: &str) -> Option<String> {
    VendorExtractor::new().extract(text).map(|m| m.value)
}
