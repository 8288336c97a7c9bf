//! Date extraction for receipts.

use chrono::NaiveDate;

use super::patterns::{DATE_DMY_PARTS, RECEIPT_DATE};
use super::{ExtractionMatch, FieldExtractor};

/// Date field extractor.
///
/// Matches are returned in their original punctuation; day and month
/// ranges are not checked.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        RECEIPT_DATE.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                .with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        RECEIPT_DATE
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// First date-shaped substring anywhere in the text.
pub fn extract_date(text: &str) -> Option<String> {
    DateExtractor::new().extract(text).map(|m| m.value)
}

/// Rewrite a day-first date (`DD.MM.YYYY`, `DD/MM/YYYY`, `DD-MM-YYYY`) as
/// `YYYY-MM-DD`.
///
/// Groups are copied verbatim, so impossible dates pass through. Strings
/// without a day-first date, including ISO input, yield `None`.
pub fn to_iso_date(raw: &str) -> Option<String> {
    let caps = DATE_DMY_PARTS.captures(raw)?;
    Some(format!("{}-{}-{}", &caps[3], &caps[2], &caps[1]))
}

/// [`to_iso_date`] followed by calendar validation.
pub fn to_calendar_date(raw: &str) -> Option<NaiveDate> {
    let iso = to_iso_date(raw)?;
    NaiveDate::parse_from_str(&iso, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_date_separators() {
        assert_eq!(extract_date("Date: 15.01.2024"), Some("15.01.2024".to_string()));
        assert_eq!(extract_date("15/01/2024 12:30"), Some("15/01/2024".to_string()));
        assert_eq!(extract_date("15-01-2024"), Some("15-01-2024".to_string()));
        assert_eq!(extract_date("issued 2024-01-15"), Some("2024-01-15".to_string()));
    }

    #[test]
    fn test_first_match_wins() {
        let text = "Printed 2024-02-01\nSale 15/01/2024";
        assert_eq!(extract_date(text), Some("2024-02-01".to_string()));

        let all = DateExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].value, "15/01/2024");
        assert_eq!(all[0].position, Some((8, 18)));
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(extract_date("45/67/2024"), Some("45/67/2024".to_string()));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date(""), None);
        assert_eq!(extract_date("Total 5.50"), None);
        assert_eq!(extract_date("2024/01/15"), None);
    }

    #[test]
    fn test_to_iso_date() {
        assert_eq!(to_iso_date("15.01.2024"), Some("2024-01-15".to_string()));
        assert_eq!(to_iso_date("15/01/2024"), Some("2024-01-15".to_string()));
        assert_eq!(to_iso_date("01/15/2024"), Some("2024-15-01".to_string()));
        assert_eq!(to_iso_date("2024-01-15"), None);
        assert_eq!(to_iso_date("garbage"), None);
    }

    #[test]
    fn test_to_calendar_date() {
        assert_eq!(
            to_calendar_date("15.01.2024"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        // month 15 after day-first reading
        assert_eq!(to_calendar_date("01/15/2024"), None);
        assert_eq!(to_calendar_date("2024-01-15"), None);
    }
}
