//! Rendering of parsed receipts and drafts.

use serde::Serialize;

use rcpt_core::models::config::OutputFormat;
use rcpt_core::{ParsedReceipt, TransactionDraft};

/// Output format flag.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// JSON body when a draft is built, mirroring the upload response.
#[derive(Serialize)]
struct DraftResponse<'a> {
    transaction: &'a TransactionDraft,
    parsed: &'a ParsedReceipt,
}

pub fn format_receipt(
    receipt: &ParsedReceipt,
    draft: Option<&TransactionDraft>,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => match draft {
            Some(transaction) => to_json(
                &DraftResponse {
                    transaction,
                    parsed: receipt,
                },
                pretty,
            ),
            None => to_json(receipt, pretty),
        },
        OutputFormat::Csv => format_csv(receipt, draft),
        OutputFormat::Text => Ok(format_text(receipt, draft)),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

pub const CSV_HEADER: [&str; 5] = ["date", "amount", "gst", "vendor", "category"];

/// CSV fields of a receipt, in [`CSV_HEADER`] order.
pub fn csv_fields(receipt: &ParsedReceipt) -> [String; 5] {
    [
        receipt.date().unwrap_or_default().to_string(),
        receipt.amount().unwrap_or_default().to_string(),
        receipt.gst().unwrap_or_default().to_string(),
        receipt.vendor().unwrap_or_default().to_string(),
        receipt.category().to_string(),
    ]
}

fn format_csv(receipt: &ParsedReceipt, draft: Option<&TransactionDraft>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = CSV_HEADER.to_vec();
    let mut row: Vec<String> = csv_fields(receipt).to_vec();

    if let Some(draft) = draft {
        header.extend(["iso_date", "amount_value", "user_id"]);
        row.push(draft.date.map(|d| d.to_string()).unwrap_or_default());
        row.push(draft.amount.map(|a| a.to_string()).unwrap_or_default());
        row.push(draft.user_id.to_string());
    }

    wtr.write_record(&header)?;
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(receipt: &ParsedReceipt, draft: Option<&TransactionDraft>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Vendor:   {}\n", or_dash(receipt.vendor())));
    output.push_str(&format!("Date:     {}\n", or_dash(receipt.date())));
    output.push_str(&format!("Amount:   {}\n", or_dash(receipt.amount())));
    output.push_str(&format!("GST:      {}\n", or_dash(receipt.gst())));
    output.push_str(&format!("Category: {}\n", receipt.category()));

    if let Some(draft) = draft {
        output.push('\n');
        output.push_str(&format!("Expense for user {}:\n", draft.user_id));
        output.push_str(&format!(
            "  Date:   {}\n",
            draft.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
        ));
        output.push_str(&format!(
            "  Amount: {}\n",
            draft.amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
        ));
        output.push_str(&format!("  Category: {}\n", draft.category));
    }

    output
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcpt_core::parse_receipt_text;

    #[test]
    fn test_csv_output() {
        let receipt = parse_receipt_text("Joe's Cafe\n15/01/2024\nTotal: 1,005.50");
        let csv = format_receipt(&receipt, None, OutputFormat::Csv, false).unwrap();

        assert_eq!(
            csv,
            "date,amount,gst,vendor,category\n15/01/2024,\"1,005.50\",,Joe's Cafe,Food\n"
        );
    }

    #[test]
    fn test_json_with_draft() {
        let receipt = parse_receipt_text("Joe's Cafe\n15/01/2024\nTotal: 5.50");
        let draft = TransactionDraft::from_receipt(&receipt, 9).unwrap();
        let json = format_receipt(&receipt, Some(&draft), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["transaction"]["type"], "expense");
        assert_eq!(value["transaction"]["date"], "2024-01-15");
        assert_eq!(value["parsed"]["amount"], "5.50");
    }

    #[test]
    fn test_text_output() {
        let receipt = parse_receipt_text("");
        let text = format_receipt(&receipt, None, OutputFormat::Text, false).unwrap();
        assert!(text.contains("Vendor:   -"));
        assert!(text.contains("Category: Uncategorized"));
    }
}
