//! Parse command - extract fields from the OCR text of one receipt.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use rcpt_core::models::config::OutputFormat;
use rcpt_core::models::transaction::parse_user_id;
use rcpt_core::{ReceiptTextParser, TransactionDraft};

use super::load_config;
use super::output::{format_receipt, FormatArg};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// File with OCR text, or "-" to read stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Also build an expense transaction for this user id
    #[arg(short, long, allow_hyphen_values = true)]
    user_id: Option<String>,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let user_id = match args.user_id.as_deref() {
        Some(raw) => Some(parse_user_id(raw).map_err(|e| anyhow::anyhow!("Invalid userId: {}", e))?),
        None => None,
    };

    let text = read_input(&args.input).await?;
    info!("Read {} bytes of OCR text", text.len());

    let result = ReceiptTextParser::new().parse_detailed(&text);
    let receipt = &result.receipt;

    let draft = match user_id {
        Some(user_id) => Some(
            TransactionDraft::from_receipt(receipt, user_id)?
                .with_default_category(&config.transaction.default_category),
        ),
        None => None,
    };

    if args.show_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }

    let format: OutputFormat = args.format.map(Into::into).unwrap_or(config.output.format);
    let output = format_receipt(receipt, draft.as_ref(), format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    debug!(
        "Parsed in {}us, total {:?}",
        result.processing_time_us,
        start.elapsed()
    );

    Ok(())
}

/// Read OCR text from a file, or from stdin when the path is `-`.
pub async fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        return Ok(text);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(tokio::fs::read_to_string(path).await?)
}
