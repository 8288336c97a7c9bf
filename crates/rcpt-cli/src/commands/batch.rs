//! Batch processing command for many receipt text files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use rcpt_core::models::config::{OutputFormat, RcptConfig};
use rcpt_core::{ParsedReceipt, ReceiptParser, ReceiptTextParser};

use super::load_config;
use super::output::{csv_fields, format_receipt, FormatArg, CSV_HEADER};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    receipt: Option<ParsedReceipt>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;
    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && config.batch.accepts(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        tokio::fs::create_dir_all(output_dir).await?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = ReceiptTextParser::new();
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                results.push(ProcessResult {
                    path,
                    receipt: Some(parser.parse(&text)),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        receipt: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to read {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let format: OutputFormat = args.format.map(Into::into).unwrap_or(config.output.format);

    if let Some(ref output_dir) = args.output_dir {
        write_outputs(output_dir, &results, format, &config).await?;
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful = results.iter().filter(|r| r.receipt.is_some()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let with_amount = results
        .iter()
        .filter(|r| r.receipt.as_ref().is_some_and(|rc| rc.amount().is_some()))
        .count();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} parsed ({} with an amount), {} failed",
        style(successful).green(),
        with_amount,
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

async fn write_outputs(
    output_dir: &Path,
    results: &[ProcessResult],
    format: OutputFormat,
    config: &RcptConfig,
) -> anyhow::Result<()> {
    let mut used = HashSet::new();

    for result in results {
        let Some(receipt) = &result.receipt else {
            continue;
        };

        let stem = result
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("receipt");
        let output_name = unique_name(stem, &mut used);
        if output_name != stem {
            warn!(
                "Output name {} already taken, writing {} as {}",
                stem,
                result.path.display(),
                output_name
            );
        }
        let output_path = output_dir.join(format!("{}.{}", output_name, format.extension()));

        let content = format_receipt(receipt, None, format, config.output.pretty)?;
        tokio::fs::write(&output_path, content).await?;
        debug!("Wrote output to {}", output_path.display());
    }

    Ok(())
}

/// `stem`, or `stem-N` with the smallest N not yet in `used`.
fn unique_name(stem: &str, used: &mut HashSet<String>) -> String {
    let mut name = stem.to_string();
    let mut n = 1;
    while used.contains(&name) {
        name = format!("{}-{}", stem, n);
        n += 1;
    }
    used.insert(name.clone());
    name
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["file"];
    header.extend(CSV_HEADER);
    header.push("error");
    wtr.write_record(&header)?;

    for result in results {
        let mut row = vec![result.path.display().to_string()];
        match &result.receipt {
            Some(receipt) => row.extend(csv_fields(receipt)),
            None => row.extend(std::iter::repeat_n(String::new(), CSV_HEADER.len())),
        }
        row.push(result.error.clone().unwrap_or_default());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name() {
        let mut used = HashSet::new();
        assert_eq!(unique_name("r", &mut used), "r");
        assert_eq!(unique_name("r", &mut used), "r-1");
        assert_eq!(unique_name("r", &mut used), "r-2");
        assert_eq!(unique_name("cafe", &mut used), "cafe");

        used.insert("x-1".to_string());
        assert_eq!(unique_name("x", &mut used), "x");
        assert_eq!(unique_name("x", &mut used), "x-2");
    }
}
