//! FILENAME: app/src/main.rs
//! CLI binary for prenote.
//!
//! A thin shim over the library crate that maps CLI flags to an exporter
//! and prints the artifact path.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use convert::OutputFormat;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prenote", version, about = "Turn a pick/move workbook into a printable label document")]
struct Cli {
    /// Input pick/move workbook (.xlsx) with a "Data" sheet.
    input: PathBuf,

    /// Directory the artifact is written into.
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Artifact format.
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: FormatArg,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Paginated landscape PDF (LibreOffice).
    Pdf,
    /// 300 DPI JPEG (LibreOffice + ImageMagick).
    Jpeg,
}

impl From<FormatArg> for OutputFormat {
    fn from(v: FormatArg) -> Self {
        match v {
            FormatArg::Pdf => OutputFormat::Pdf,
            FormatArg::Jpeg => OutputFormat::Jpeg,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;

    let exporter = OutputFormat::from(cli.format).exporter();
    let artifact = prenote::process_file(&cli.input, &cli.out_dir, exporter.as_ref())
        .with_context(|| format!("processing {}", cli.input.display()))?;

    println!("{}", artifact.display());
    Ok(())
}
