//! FILENAME: core/convert/src/exporter.rs
//! PURPOSE: Document exporter strategies for the processed workbook.
//! CONTEXT: The pipeline hands the exporter its finished sheets; the
//! exporter stages them as a scratch XLSX and drives the external
//! converters (LibreOffice for pagination to PDF, ImageMagick for
//! rasterization to JPEG). The converters are opaque subprocesses: a
//! missing binary or a non-zero exit aborts the invocation with a
//! `ConversionError` and nothing is retried.

use crate::ConversionError;
use engine::Sheet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Basename for the staged workbook and the derived artifacts.
const ARTIFACT_STEM: &str = "prenote";

/// Rasterization density for JPEG export, in DPI.
pub const JPEG_DENSITY: u32 = 300;
/// JPEG quality (1-100).
pub const JPEG_QUALITY: u32 = 100;

/// A strategy producing the final distributable artifact from the
/// processed sheets. One pipeline, pluggable output.
pub trait DocumentExporter {
    /// Writes the artifact into `output_dir` and returns its path.
    fn export(&self, sheets: &[Sheet], output_dir: &Path) -> Result<PathBuf, ConversionError>;
}

/// The artifact kind requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Jpeg,
}

impl OutputFormat {
    pub fn exporter(self) -> Box<dyn DocumentExporter> {
        match self {
            OutputFormat::Pdf => Box::new(PdfExporter::default()),
            OutputFormat::Jpeg => Box::new(JpegExporter::default()),
        }
    }
}

/// Paginates the workbook to PDF through headless LibreOffice.
pub struct PdfExporter {
    program: String,
}

impl Default for PdfExporter {
    fn default() -> Self {
        PdfExporter {
            program: "libreoffice".to_string(),
        }
    }
}

impl PdfExporter {
    pub fn with_program(program: impl Into<String>) -> Self {
        PdfExporter {
            program: program.into(),
        }
    }

    fn convert(&self, workbook: &Path, output_dir: &Path) -> Result<PathBuf, ConversionError> {
        run_converter(
            Command::new(&self.program)
                .arg("--headless")
                .arg("--convert-to")
                .arg("pdf")
                .arg("--outdir")
                .arg(output_dir)
                .arg(workbook),
            &self.program,
        )?;

        // LibreOffice names the output after the input stem.
        let pdf = output_dir.join(format!("{ARTIFACT_STEM}.pdf"));
        if !pdf.is_file() {
            return Err(ConversionError::MissingOutput(pdf));
        }
        Ok(pdf)
    }
}

impl DocumentExporter for PdfExporter {
    fn export(&self, sheets: &[Sheet], output_dir: &Path) -> Result<PathBuf, ConversionError> {
        let scratch = tempfile::tempdir()?;
        let workbook = stage_workbook(sheets, scratch.path())?;
        let pdf = self.convert(&workbook, output_dir)?;
        info!(artifact = %pdf.display(), "exported PDF");
        Ok(pdf)
    }
}

/// Rasterizes the paginated document to JPEG through ImageMagick.
pub struct JpegExporter {
    pdf: PdfExporter,
    program: String,
    density: u32,
    quality: u32,
}

impl Default for JpegExporter {
    fn default() -> Self {
        JpegExporter {
            pdf: PdfExporter::default(),
            program: "convert".to_string(),
            density: JPEG_DENSITY,
            quality: JPEG_QUALITY,
        }
    }
}

impl DocumentExporter for JpegExporter {
    fn export(&self, sheets: &[Sheet], output_dir: &Path) -> Result<PathBuf, ConversionError> {
        let scratch = tempfile::tempdir()?;
        let workbook = stage_workbook(sheets, scratch.path())?;
        let pdf = self.pdf.convert(&workbook, scratch.path())?;

        let jpeg = output_dir.join(format!("{ARTIFACT_STEM}.jpg"));
        run_converter(
            Command::new(&self.program)
                .arg("-density")
                .arg(self.density.to_string())
                .arg(&pdf)
                .arg("-quality")
                .arg(self.quality.to_string())
                .arg(&jpeg),
            &self.program,
        )?;

        if !jpeg.is_file() {
            return Err(ConversionError::MissingOutput(jpeg));
        }
        info!(artifact = %jpeg.display(), "exported JPEG");
        Ok(jpeg)
    }
}

/// Serializes the sheets into a scratch workbook for the converters.
fn stage_workbook(sheets: &[Sheet], dir: &Path) -> Result<PathBuf, ConversionError> {
    let path = dir.join(format!("{ARTIFACT_STEM}.xlsx"));
    persistence::save_workbook(sheets, &path)?;
    Ok(path)
}

fn run_converter(command: &mut Command, program: &str) -> Result<(), ConversionError> {
    debug!(?command, "running converter");
    let output = command.output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConversionError::ConverterMissing {
                program: program.to_string(),
            }
        } else {
            ConversionError::Io(e)
        }
    })?;

    if !output.status.success() {
        return Err(ConversionError::ConverterFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{CellStyle, CellValue};

    fn sheet() -> Sheet {
        let mut s = Sheet::new("Data");
        s.set_value(
            0,
            0,
            CellValue::Text("ARTNO".to_string()),
            CellStyle::new(),
        );
        s
    }

    #[test]
    fn missing_converter_binary_is_reported() {
        let exporter = PdfExporter::with_program("prenote-no-such-converter");
        let dir = tempfile::tempdir().unwrap();

        let err = exporter.export(&[sheet()], dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::ConverterMissing { program } if program == "prenote-no-such-converter"
        ));
    }

    #[test]
    fn format_selects_an_exporter() {
        // Smoke check that both variants resolve to a strategy.
        let _ = OutputFormat::Pdf.exporter();
        let _ = OutputFormat::Jpeg.exporter();
    }
}
