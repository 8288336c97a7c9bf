//! Common regex patterns for receipt text extraction.
//!
//! Digit classes are ASCII only; OCR output for English receipts never
//! needs the Unicode `\d` class.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // DD.MM.YYYY, DD/MM/YYYY, DD-MM-YYYY or YYYY-MM-DD
    pub static ref RECEIPT_DATE: Regex = Regex::new(
        r"[0-9]{2}[./\-][0-9]{2}[./\-][0-9]{4}|[0-9]{4}-[0-9]{2}-[0-9]{2}"
    ).unwrap();

    // Day-first date split into parts, for ISO normalization
    pub static ref DATE_DMY_PARTS: Regex = Regex::new(
        r"([0-9]{2})[./\-]([0-9]{2})[./\-]([0-9]{4})"
    ).unwrap();

    // Any numeric token on a total line (1, 5.50, 1,234.50)
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"[0-9][0-9,.]*"
    ).unwrap();

    // Numeric token of two or more characters, for the largest-value fallback
    pub static ref MULTI_CHAR_NUMBER_TOKEN: Regex = Regex::new(
        r"[0-9][0-9,.]+"
    ).unwrap();

    // Numeric prefix of a separator-free token
    pub static ref LEADING_NUMBER: Regex = Regex::new(
        r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)"
    ).unwrap();

    // Labeled tax line
    pub static ref TAX_LABEL: Regex = Regex::new(
        r"(?i)(?:GST|Tax)\s*:?\s*([0-9,.]+)"
    ).unwrap();

    // Labeled vendor, capture runs to end of line
    pub static ref VENDOR_LABEL: Regex = Regex::new(
        r"(?i)(?:From|Vendor|Store|Shop|Merchant)\s*:?\s*([^\r\n\u{2028}\u{2029}]*)"
    ).unwrap();

    // Leading integer of a user id path parameter
    pub static ref LEADING_INTEGER: Regex = Regex::new(
        r"^\s*([+-]?[0-9]+)"
    ).unwrap();
}

/// Keywords marking a line that carries the receipt total.
pub const TOTAL_KEYWORDS: &[&str] = &[
    "total",
    "grand total",
    "amount",
    "balance due",
    "net amount",
    "final amount",
    "payable",
    "amount due",
    "total due",
    "total payable",
];
