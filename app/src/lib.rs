//! FILENAME: app/src/lib.rs
//! Prenote processing pipeline entry point.
//!
//! One invocation turns one pick/move workbook into one artifact:
//! load -> filter -> rewrite -> derive labels -> render -> export.
//! Every stage fails fast; there is no retry and no partial output.

use convert::{ConversionError, DocumentExporter};
use persistence::PersistenceError;
use pipeline::SchemaError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("not an XLSX workbook: {}", .0.display())]
    UnsupportedInput(PathBuf),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Runs the whole pipeline for one workbook and returns the artifact path.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    exporter: &dyn DocumentExporter,
) -> Result<PathBuf, ProcessError> {
    if input.extension().and_then(|e| e.to_str()) != Some("xlsx") {
        return Err(ProcessError::UnsupportedInput(input.to_path_buf()));
    }

    let raw = persistence::load_table(input, pipeline::SHEET_DATA)?;
    let filtered = pipeline::filter_table(&raw)?;
    let data_sheet = pipeline::presentation_sheet(&filtered);
    let label_sheet = pipeline::derive_label_sheet(&data_sheet);
    let rendered = pipeline::render_model(&label_sheet).to_sheet(pipeline::SHEET_LABELS);

    let artifact = exporter.export(&[data_sheet, rendered], output_dir)?;
    info!(
        input = %input.display(),
        artifact = %artifact.display(),
        rows = filtered.row_count(),
        "processed workbook"
    );
    Ok(artifact)
}
