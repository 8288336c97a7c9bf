//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::{parse_receipt_text, ExtractionResult, ReceiptParser, ReceiptTextParser};
pub use rules::AmountStrategy;
