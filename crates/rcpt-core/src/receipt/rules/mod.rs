//! Rule-based field extractors for receipt OCR text.

pub mod amounts;
pub mod category;
pub mod dates;
pub mod patterns;
pub mod tax;
pub mod vendor;

pub use amounts::{extract_amount, AmountCandidate, AmountExtractor, AmountStrategy};
pub use category::{classify, CATEGORY_RULES};
pub use dates::{extract_date, DateExtractor};
pub use patterns::*;
pub use tax::{extract_tax, TaxExtractor};
pub use vendor::{extract_vendor, VendorExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract every candidate for the field, best first.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched value with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the source text, when matched against the whole text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Strip surrounding whitespace, counting a byte order mark as whitespace.
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Trimmed, non-empty lines of the text in their original order.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(trim_text)
        .filter(|l| !l.is_empty())
        .collect()
}
