//! Total amount extraction for receipts.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::patterns::{LEADING_NUMBER, MULTI_CHAR_NUMBER_TOKEN, NUMBER_TOKEN, TOTAL_KEYWORDS};
use super::{non_empty_lines, ExtractionMatch, FieldExtractor};

/// How the amount was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountStrategy {
    /// Last number on the bottom-most total line.
    Keyword,
    /// Largest number anywhere in the text.
    LargestValue,
}

/// An amount together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountCandidate {
    pub amount: String,
    pub strategy: AmountStrategy,
}

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Largest numeric token in the whole text.
    ///
    /// Tokens compare by their numeric prefix with thousands separators
    /// removed; the earliest token wins among equal values.
    pub fn largest_value(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let mut best: Option<(f64, ExtractionMatch<String>)> = None;

        for m in MULTI_CHAR_NUMBER_TOKEN.find_iter(text) {
            let Some(value) = leading_number(&m.as_str().replace(',', "")) else {
                continue;
            };
            if best.as_ref().is_none_or(|(max, _)| value > *max) {
                best = Some((
                    value,
                    ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                        .with_position(m.start(), m.end()),
                ));
            }
        }

        best.map(|(_, m)| m)
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Candidates from total lines, bottom-most first. Each is the last
    /// numeric token of its line; lines without a number are skipped.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        non_empty_lines(text)
            .into_iter()
            .rev()
            .filter(|line| is_total_line(line))
            .filter_map(|line| {
                NUMBER_TOKEN
                    .find_iter(line)
                    .last()
                    .map(|m| ExtractionMatch::new(m.as_str().to_string(), line))
            })
            .collect()
    }
}

/// Whether a line mentions one of the total keywords.
pub fn is_total_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    TOTAL_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Pick the receipt total.
///
/// The keyword pass runs first; the largest-value fallback only runs when
/// no total line carries a number.
pub fn extract_amount(text: &str) -> Option<AmountCandidate> {
    let extractor = AmountExtractor::new();

    if let Some(m) = extractor.extract(text) {
        debug!("Amount {} taken from total line {:?}", m.value, m.source);
        return Some(AmountCandidate {
            amount: m.value,
            strategy: AmountStrategy::Keyword,
        });
    }

    let m = extractor.largest_value(text)?;
    debug!("No total line, using largest value {}", m.value);
    Some(AmountCandidate {
        amount: m.value,
        strategy: AmountStrategy::LargestValue,
    })
}

/// Numeric prefix of a token: digits with an optional fractional part.
/// Anything after the prefix is ignored, so `"1.2.3"` reads as `1.2`.
pub fn leading_number(s: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(s)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse a receipt amount such as `"1,234.50"` into a decimal.
///
/// Commas are thousands separators and are dropped; trailing junk after
/// the numeric prefix is ignored.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(',', "");
    let prefix = LEADING_NUMBER.find(&cleaned)?.as_str();

    if prefix.starts_with('.') {
        Decimal::from_str(&format!("0{}", prefix)).ok()
    } else {
        Decimal::from_str(prefix).ok()
    }
}
