//! FILENAME: core/convert/src/lib.rs
//! Document export boundary.
//!
//! Everything in here talks to external converter binaries; the pipeline
//! itself stays pure. See `exporter` for the strategy implementations.

mod error;
mod exporter;

pub use error::ConversionError;
pub use exporter::{
    DocumentExporter, JpegExporter, OutputFormat, PdfExporter, JPEG_DENSITY, JPEG_QUALITY,
};
