//! Tax/GST extraction for receipts.

use super::patterns::TAX_LABEL;
use super::{ExtractionMatch, FieldExtractor};

/// Extractor for a labeled tax figure (`GST 1.50`, `Tax: 0.45`).
pub struct TaxExtractor;

impl TaxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TaxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TaxExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        TAX_LABEL
            .captures_iter(text)
            .filter_map(|caps| {
                let full = caps.get(0)?;
                let value = caps.get(1)?;
                Some(
                    ExtractionMatch::new(value.as_str().to_string(), full.as_str())
                        .with_position(full.start(), full.end()),
                )
            })
            .collect()
    }
}

/// First labeled tax figure in the text.
pub fn extract_tax(text: &str) -> Option<String> {
    TaxExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_gst() {
        assert_eq!(extract_tax("GST: 1.50"), Some("1.50".to_string()));
        assert_eq!(extract_tax("gst 12%"), Some("12".to_string()));
        assert_eq!(extract_tax("Sales TAX   0.45"), Some("0.45".to_string()));
        assert_eq!(extract_tax("Tax:1,024.00"), Some("1,024.00".to_string()));
    }

    #[test]
    fn test_first_match_only() {
        let text = "GST 5% 2.50\nTax 1.00";
        assert_eq!(extract_tax(text), Some("5".to_string()));
        assert_eq!(TaxExtractor::new().extract_all(text).len(), 2);
    }

    #[test]
    fn test_label_without_number() {
        assert_eq!(extract_tax("Tax invoice\nTotal 10.00"), None);
        assert_eq!(extract_tax("Taxi fare 12.00"), None);
        assert_eq!(extract_tax(""), None);
    }

    #[test]
    fn test_label_across_line_break() {
        assert_eq!(extract_tax("GST:\n3.00"), Some("3.00".to_string()));
    }
}
