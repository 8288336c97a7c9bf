//! Core library for receipt OCR text parsing.
//!
//! This crate provides:
//! - Heuristic field extraction from raw OCR text (date, total, GST, vendor)
//! - Keyword-based spending category classification
//! - Conversion of a parsed receipt into an expense transaction draft

pub mod error;
pub mod models;
pub mod receipt;

pub use error::{DraftError, RcptError, Result};
pub use models::config::RcptConfig;
pub use models::receipt::{Category, ParsedReceipt};
pub use models::transaction::{TransactionDraft, TransactionKind};
pub use receipt::{
    parse_receipt_text, AmountStrategy, ExtractionResult, ReceiptParser, ReceiptTextParser,
};
