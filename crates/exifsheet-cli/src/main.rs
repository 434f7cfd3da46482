use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Parser;
use exifsheet_core::{scan_directory, write_sheet};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inventory EXIF metadata from a JPEG collection into a spreadsheet", long_about = None)]
struct Cli {
    /// Root directory to scan recursively for JPEG images
    #[arg(short, long)]
    dir: PathBuf,

    /// Output spreadsheet path (CSV, overwritten if it exists)
    #[arg(short, long)]
    output: PathBuf,

    /// IANA timezone used to interpret the cameras' local timestamps
    #[arg(long, default_value = "Asia/Kolkata")]
    timezone: Tz,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let outcome = scan_directory(&cli.dir, cli.timezone)
        .with_context(|| format!("failed to scan directory {}", cli.dir.display()))?;
    info!(
        processed = outcome.records.len(),
        skipped = outcome.skipped,
        "scan finished"
    );

    write_sheet(&outcome.records, &cli.output)
        .with_context(|| format!("failed to write spreadsheet {}", cli.output.display()))?;
    info!("spreadsheet {} created successfully", cli.output.display());

    Ok(())
}
