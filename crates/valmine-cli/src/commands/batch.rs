//! Batch processing command for multiple report files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Map, Value};
use tracing::warn;

use valmine_core::extract::{presence_marks, RecordAssembler};
use valmine_core::models::record::ExtractionRecord;

use super::process::{acquire_text, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Consolidated CSV output path
    #[arg(short, long, default_value = "consolidated_valuations.csv")]
    output: PathBuf,

    /// Also write a per-field FOUND/MISSING debug JSON
    #[arg(long)]
    debug_matches: Option<PathBuf>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let assembler = RecordAssembler::new(config.clone());
    let mut records: Vec<(PathBuf, ExtractionRecord)> = Vec::with_capacity(files.len());
    let mut skipped: Vec<(PathBuf, String)> = Vec::new();

    for path in files {
        // An unreadable or text-free document is skipped and logged, not
        // fatal to the batch.
        match acquire_text(&path, &config) {
            Ok(text) if text.trim().len() >= config.pdf.min_text_length => {
                let record = assembler.assemble(&text, &path.to_string_lossy());
                records.push((path, record));
            }
            Ok(_) => {
                warn!("no usable text extracted from {}, skipping", path.display());
                skipped.push((path, "no usable text".to_string()));
            }
            Err(e) => {
                warn!("failed to process {}: {}", path.display(), e);
                skipped.push((path, e.to_string()));
            }
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete");

    write_consolidated_csv(&args.output, &assembler, &records)?;

    if let Some(debug_path) = &args.debug_matches {
        write_debug_matches(debug_path, &records)?;
        println!(
            "{} Debug matches written to {}",
            style("✓").green(),
            debug_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        records.len() + skipped.len(),
        start.elapsed()
    );
    println!(
        "   {} extracted, {} skipped",
        style(records.len()).green(),
        style(skipped.len()).yellow()
    );

    if !skipped.is_empty() {
        println!();
        println!("{}", style("Skipped files:").yellow());
        for (path, reason) in &skipped {
            println!("  - {}: {}", path.display(), reason);
        }
    }

    println!(
        "{} Records written to {}",
        style("✓").green(),
        args.output.display()
    );

    Ok(())
}

/// One row per record; columns are the schema field names in schema order.
fn write_consolidated_csv(
    path: &PathBuf,
    assembler: &RecordAssembler,
    records: &[(PathBuf, ExtractionRecord)],
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(assembler.schema().iter().map(|field| field.name.as_str()))?;
    for (_, record) in records {
        wtr.write_record(record.values())?;
    }

    wtr.flush()?;
    Ok(())
}

/// Per-file snapshot of which fields resolved, for quick triage.
fn write_debug_matches(
    path: &PathBuf,
    records: &[(PathBuf, ExtractionRecord)],
) -> anyhow::Result<()> {
    let mut all = Map::new();
    for (source, record) in records {
        let file = source
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
            .to_string();
        let marks: Map<String, Value> = presence_marks(record)
            .into_iter()
            .map(|(name, mark)| (name, Value::String(mark.to_string())))
            .collect();
        all.insert(file, Value::Object(marks));
    }

    fs::write(path, serde_json::to_string_pretty(&Value::Object(all))?)?;
    Ok(())
}
