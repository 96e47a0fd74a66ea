//! Process command - extract a record from a single report file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use valmine_core::extract::{field_report, RecordAssembler};
use valmine_core::models::config::ValmineConfig;
use valmine_core::models::record::ExtractionRecord;
use valmine_core::pdf::{PdfExtractor, PdfProcessor};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, or pre-extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the field diagnostic line
    #[arg(long)]
    diagnostics: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = acquire_text(&args.input, &config)?;
    if text.trim().len() < config.pdf.min_text_length {
        anyhow::bail!("No usable text extracted from {}", args.input.display());
    }

    let assembler = RecordAssembler::new(config.clone());
    let record = assembler.assemble(&text, &args.input.to_string_lossy());

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.diagnostics {
        println!();
        println!(
            "{} {}",
            style("ℹ").blue(),
            field_report(&record, &config.extraction.required_fields)
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load configuration from the given path, or defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<ValmineConfig> {
    Ok(match config_path {
        Some(path) => ValmineConfig::from_file(Path::new(path))?,
        None => ValmineConfig::default(),
    })
}

/// Read document text: PDFs go through the extractor (page boundaries
/// become the configured marker), `.txt` files are taken as already
/// extracted.
pub(crate) fn acquire_text(path: &Path, config: &ValmineConfig) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => {
            let data = fs::read(path)?;
            let mut extractor = PdfExtractor::new();
            extractor.load(&data)?;
            debug!("PDF has {} pages", extractor.page_count());
            Ok(extractor.extract_text_with_markers(&config.pdf.page_break_marker)?)
        }
        "txt" | "text" => Ok(fs::read_to_string(path)?),
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

pub(crate) fn format_record(
    record: &ExtractionRecord,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(record.field_names())?;
            wtr.write_record(record.values())?;
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            for (name, value) in record.iter() {
                output.push_str(&format!("{:<16} {}\n", name, value));
            }
            Ok(output)
        }
    }
}
