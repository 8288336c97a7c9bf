//! Expense transaction drafts built from parsed receipts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::DraftError;
use crate::models::receipt::{Category, ParsedReceipt};
use crate::receipt::rules::amounts::{leading_number, parse_amount};
use crate::receipt::rules::dates::to_calendar_date;
use crate::receipt::rules::patterns::LEADING_INTEGER;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

/// A transaction ready to be stored for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Receipt date, when it normalizes to a valid calendar date.
    pub date: Option<NaiveDate>,

    pub amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    pub category: String,

    pub user_id: i64,

    /// OCR text the draft was built from.
    pub ocr_text: String,
}

impl TransactionDraft {
    /// Build an expense from a parsed receipt.
    ///
    /// Fails only when the amount is present but has no numeric prefix.
    /// An amount too large for a decimal (a barcode picked by the
    /// largest-value pass, say) is dropped, as is an unreadable tax figure.
    pub fn from_receipt(receipt: &ParsedReceipt, user_id: i64) -> Result<Self, DraftError> {
        let amount = match receipt.amount() {
            Some(raw) => match parse_amount(raw) {
                Some(value) => Some(value),
                None if leading_number(&raw.trim().replace(',', "")).is_some() => {
                    warn!("Dropping amount {:?}, out of range for a decimal", raw);
                    None
                }
                None => {
                    return Err(DraftError::InvalidAmount {
                        field: "amount".to_string(),
                        value: raw.to_string(),
                    });
                }
            },
            None => None,
        };

        let gst = receipt.gst().and_then(|raw| {
            let parsed = parse_amount(raw);
            if parsed.is_none() {
                warn!("Dropping unreadable GST value {:?}", raw);
            }
            parsed
        });

        Ok(Self {
            kind: TransactionKind::Expense,
            date: receipt.date().and_then(to_calendar_date),
            amount,
            gst,
            vendor: receipt.vendor().map(str::to_string),
            category: receipt.category().to_string(),
            user_id,
            ocr_text: receipt.raw().to_string(),
        })
    }

    /// Replace an `Uncategorized` category with a configured default.
    pub fn with_default_category(mut self, default_category: &str) -> Self {
        let default_category = default_category.trim();
        if (self.category.is_empty() || self.category == Category::Uncategorized.as_str())
            && !default_category.is_empty()
        {
            self.category = default_category.to_string();
        }
        self
    }
}

/// Read a user id the way a path parameter is read: optional leading
/// whitespace and sign, then decimal digits. Trailing text is ignored.
pub fn parse_user_id(raw: &str) -> Result<i64, DraftError> {
    LEADING_INTEGER
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .ok_or_else(|| DraftError::InvalidUserId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::parse_receipt_text;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_draft_from_receipt() {
        let receipt = parse_receipt_text(
            "Harbour Cafe\n15.01.2024\nFlat white 4.50\nGST: 0.41\nTotal payable 1,234.50",
        );
        let draft = TransactionDraft::from_receipt(&receipt, 7).unwrap();

        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(draft.amount, Some(Decimal::from_str("1234.50").unwrap()));
        assert_eq!(draft.gst, Some(Decimal::from_str("0.41").unwrap()));
        assert_eq!(draft.vendor.as_deref(), Some("Harbour Cafe"));
        assert_eq!(draft.category, "Food");
        assert_eq!(draft.user_id, 7);
    }

    #[test]
    fn test_iso_receipt_date_is_dropped() {
        let receipt = parse_receipt_text("Corner Deli\n2024-01-15\nTotal 3.00");
        assert_eq!(receipt.date(), Some("2024-01-15"));

        let draft = TransactionDraft::from_receipt(&receipt, 1).unwrap();
        assert_eq!(draft.date, None);
    }

    #[test]
    fn test_unreadable_gst_is_dropped() {
        let receipt = ParsedReceipt::new(
            None,
            Some("5.00".to_string()),
            Some(".".to_string()),
            None,
            Category::Uncategorized,
            "",
        );
        let draft = TransactionDraft::from_receipt(&receipt, 1).unwrap();
        assert_eq!(draft.gst, None);
        assert_eq!(draft.amount, Some(Decimal::from(5)));
    }

    #[test]
    fn test_unreadable_amount_fails() {
        let receipt = ParsedReceipt::new(
            None,
            Some(",".to_string()),
            None,
            None,
            Category::Uncategorized,
            "",
        );
        assert_eq!(
            TransactionDraft::from_receipt(&receipt, 1),
            Err(DraftError::InvalidAmount {
                field: "amount".to_string(),
                value: ",".to_string(),
            })
        );
    }

    #[test]
    fn test_oversized_amount_is_dropped() {
        let receipt = parse_receipt_text("Corner Deli\nItem 4.50\n4006381333931234567890123456789");
        assert_eq!(receipt.amount(), Some("4006381333931234567890123456789"));

        let draft = TransactionDraft::from_receipt(&receipt, 1).unwrap();
        assert_eq!(draft.amount, None);
        assert_eq!(draft.vendor.as_deref(), Some("Corner Deli"));
        assert_eq!(draft.user_id, 1);
    }

    #[test]
    fn test_default_category() {
        let receipt = parse_receipt_text("Acme Hardware\nTotal 9.99");
        let draft = TransactionDraft::from_receipt(&receipt, 1)
            .unwrap()
            .with_default_category("Household");
        assert_eq!(draft.category, "Household");

        let receipt = parse_receipt_text("Joe's Cafe\nTotal 9.99");
        let draft = TransactionDraft::from_receipt(&receipt, 1)
            .unwrap()
            .with_default_category("Household");
        assert_eq!(draft.category, "Food");
    }

    #[test]
    fn test_serialized_type_field() {
        let receipt = parse_receipt_text("Acme Hardware\nTotal 9.99");
        let draft = TransactionDraft::from_receipt(&receipt, 3).unwrap();
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["type"], "expense");
        assert_eq!(json["category"], "Uncategorized");
        assert_eq!(json["user_id"], 3);
        assert!(json.get("gst").is_none());
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42"), Ok(42));
        assert_eq!(parse_user_id("  -3"), Ok(-3));
        assert_eq!(parse_user_id("12abc"), Ok(12));
        assert_eq!(
            parse_user_id("abc"),
            Err(DraftError::InvalidUserId("abc".to_string()))
        );
        assert!(parse_user_id("").is_err());
    }
}
