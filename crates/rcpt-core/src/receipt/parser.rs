//! Receipt text parser composing the rule-based extractors.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::receipt::ParsedReceipt;

use super::rules::{
    amounts::extract_amount, category::classify, dates::extract_date, tax::extract_tax,
    vendor::extract_vendor, AmountStrategy,
};

/// Result of a detailed parse.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted receipt fields.
    pub receipt: ParsedReceipt,
    /// Strategy that produced the amount, if any.
    pub amount_strategy: Option<AmountStrategy>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in microseconds.
    pub processing_time_us: u64,
}

/// Trait for receipt parsing.
///
/// Parsing is infallible: fields that cannot be found are left empty.
pub trait ReceiptParser {
    /// Parse a receipt from OCR text.
    fn parse(&self, text: &str) -> ParsedReceipt;
}

/// Heuristic parser over line-based OCR text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptTextParser;

impl ReceiptTextParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse and report how each field was obtained.
    pub fn parse_detailed(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing receipt from {} characters of text", text.len());

        let date = extract_date(text);
        debug!("Date: {:?}", date);

        let amount = extract_amount(text);
        let amount_strategy = amount.as_ref().map(|a| a.strategy);

        let gst = extract_tax(text);
        debug!("GST: {:?}", gst);

        let vendor = extract_vendor(text);
        debug!("Vendor: {:?}", vendor);

        let category = classify(text);
        debug!("Category: {}", category);

        let receipt = ParsedReceipt::new(
            date,
            amount.map(|a| a.amount),
            gst,
            vendor,
            category,
            text,
        );

        let mut warnings: Vec<String> = receipt
            .missing_fields()
            .into_iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();
        if amount_strategy == Some(AmountStrategy::LargestValue) {
            warnings.push("No total line found, amount is the largest number".to_string());
        }

        ExtractionResult {
            receipt,
            amount_strategy,
            warnings,
            processing_time_us: start.elapsed().as_micros() as u64,
        }
    }
}

impl ReceiptParser for ReceiptTextParser {
    fn parse(&self, text: &str) -> ParsedReceipt {
        self.parse_detailed(text).receipt
    }
}

/// Parse OCR text into a [`ParsedReceipt`].
pub fn parse_receipt_text(text: &str) -> ParsedReceipt {
    ReceiptTextParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::Category;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_cafe_receipt() {
        let text = "Joe's Cafe\nCoffee 3.50\nTea 2.00\nTotal: 5.50";
        let receipt = parse_receipt_text(text);

        assert_eq!(
            receipt,
            ParsedReceipt::new(
                None,
                Some("5.50".to_string()),
                None,
                Some("Joe's Cafe".to_string()),
                Category::Food,
                text,
            )
        );
    }

    #[test]
    fn test_parse_labeled_vendor() {
        let text = "Vendor: Acme Hardware\n01/15/2024\nTotal $99.99";
        let receipt = parse_receipt_text(text);

        assert_eq!(receipt.vendor(), Some("Acme Hardware"));
        assert_eq!(receipt.date(), Some("01/15/2024"));
        assert_eq!(receipt.amount(), Some("99.99"));
        assert_eq!(receipt.gst(), None);
        assert_eq!(receipt.raw(), text);
    }

    #[test]
    fn test_parse_full_receipt() {
        let text = r#"
            GREENLEAF SUPERMARKET
            12 Market Street
            Date: 03.02.2024  18:42

            Apples 1kg          4.20
            Bread               3.10
            Milk 2L             2.95

            Subtotal           10.25
            GST 10%: 1.03
            TOTAL              11.28
            Paid by card
        "#;
        let result = ReceiptTextParser::new().parse_detailed(text);
        let receipt = &result.receipt;

        assert_eq!(receipt.date(), Some("03.02.2024"));
        assert_eq!(receipt.amount(), Some("11.28"));
        assert_eq!(receipt.gst(), Some("10"));
        assert_eq!(receipt.vendor(), Some("GREENLEAF SUPERMARKET"));
        assert_eq!(receipt.category(), Category::Groceries);
        assert_eq!(result.amount_strategy, Some(AmountStrategy::Keyword));
        assert_eq!(result.warnings, Vec::<String>::new());
    }

    #[test]
    fn test_parse_degrades_on_garbage() {
        for text in ["", "   ", "\n\n\t\n", "~~##@@!!", "\u{feff}\u{2028}"] {
            let result = ReceiptTextParser::new().parse_detailed(text);
            let receipt = &result.receipt;

            assert_eq!(receipt.date(), None);
            assert_eq!(receipt.amount(), None);
            assert_eq!(receipt.gst(), None);
            assert_eq!(receipt.category(), Category::Uncategorized);
            assert_eq!(result.amount_strategy, None);
            assert!(result.warnings.contains(&"Could not extract amount".to_string()));
        }
    }

    #[test]
    fn test_fallback_warning() {
        let result = ReceiptTextParser::new().parse_detailed("Item 12.00\nItem 450.00\nItem 3.00");
        assert_eq!(result.receipt.amount(), Some("450.00"));
        assert_eq!(result.amount_strategy, Some(AmountStrategy::LargestValue));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("largest number")));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "12345\nJoe's Cafe\n15/01/2024\nTax: 0.50\nTotal 5.50";
        let parser = ReceiptTextParser::new();

        let first = parser.parse(text);
        let second = parser.parse(text);
        assert_eq!(first, second);
        assert_eq!(first.vendor(), Some("Joe's Cafe"));
        assert_eq!(first.gst(), Some("0.50"));
    }

    #[test]
    fn test_long_input_terminates() {
        let mut text = String::from("Mega Store\n");
        for i in 0..5000 {
            text.push_str(&format!("Item {} {}.99\n", i, i % 97));
        }
        text.push_str("Total 123,456.78\n");

        let receipt = parse_receipt_text(&text);
        assert_eq!(receipt.amount(), Some("123,456.78"));
        assert_eq!(receipt.category(), Category::Shopping);
    }
}
