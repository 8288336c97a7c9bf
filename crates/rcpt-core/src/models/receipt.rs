//! Parsed receipt model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Spending category assigned to a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Office,
    Shopping,
    Medical,
    Utilities,
    Groceries,
    /// No keyword matched.
    #[default]
    Uncategorized,
}

impl Category {
    /// Every category, classification order first, fallback last.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Travel,
        Category::Office,
        Category::Shopping,
        Category::Medical,
        Category::Utilities,
        Category::Groceries,
        Category::Uncategorized,
    ];

    /// Display name, as stored on transactions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Office => "Office",
            Self::Shopping => "Shopping",
            Self::Medical => "Medical",
            Self::Utilities => "Utilities",
            Self::Groceries => "Groceries",
            Self::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Best-effort fields extracted from the OCR text of one receipt.
///
/// Values are kept exactly as they appeared in the text; normalization
/// (ISO dates, numeric amounts) happens when building a
/// [`TransactionDraft`](crate::models::transaction::TransactionDraft).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    date: Option<String>,
    amount: Option<String>,
    gst: Option<String>,
    vendor: Option<String>,
    category: Category,
    raw: String,
}

impl ParsedReceipt {
    pub fn new(
        date: Option<String>,
        amount: Option<String>,
        gst: Option<String>,
        vendor: Option<String>,
        category: Category,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            gst,
            vendor,
            category,
            raw: raw.into(),
        }
    }

    /// First date-shaped substring, original punctuation.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Chosen total, possibly with thousands separators.
    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    /// Labeled tax figure.
    pub fn gst(&self) -> Option<&str> {
        self.gst.as_deref()
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The unmodified OCR text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Names of fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push("date");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.gst.is_none() {
            missing.push("gst");
        }
        if self.vendor.is_none() {
            missing.push("vendor");
        }
        missing
    }
}
