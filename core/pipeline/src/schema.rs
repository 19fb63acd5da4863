//! FILENAME: core/pipeline/src/schema.rs
//! PURPOSE: The fixed input schema and the style constants shared by the
//! pipeline stages.
//! CONTEXT: The column set of a pick/move workbook is known in advance.
//! Stages resolve columns by header name through the table/sheet lookup
//! maps; a required column that is absent is a fatal input error.

use engine::Table;
use thiserror::Error;

// ============================================================================
// SHEET AND COLUMN NAMES
// ============================================================================

/// Worksheet holding the raw move rows.
pub const SHEET_DATA: &str = "Data";
/// Worksheet holding the derived label table.
pub const SHEET_LABELS: &str = "Data2";

/// Article number; rendered as a barcode on the printed labels.
pub const COL_ARTNO: &str = "ARTNO";
/// Article description.
pub const COL_ARTNAME: &str = "ARTNAME";
/// Business-area code; only areas 14 and 15 are picked here.
pub const COL_HFB: &str = "HFB";
/// Product area within the business area.
pub const COL_PA: &str = "PA";
/// Primary slot id; the pick-walk sort key.
pub const COL_SLID_P: &str = "SLID_P";
/// Home slot id.
pub const COL_SLID_H: &str = "SLID_H";
/// Destination location; buffer destinations are not labeled.
pub const COL_TO_LOC: &str = "TO_LOC";
/// Quantity moved.
pub const COL_MOVED_QTY: &str = "MOVED_QTY";
/// Delivery type; visually separated with a right border.
pub const COL_DEL_TYPE: &str = "DEL_TYPE";

/// The columns that appear on the printed label sheet, in print order.
/// Everything else in the input is kept but hidden.
pub const LABEL_COLUMNS: [&str; 9] = [
    COL_ARTNO,
    COL_ARTNAME,
    COL_HFB,
    COL_PA,
    COL_SLID_P,
    COL_SLID_H,
    COL_TO_LOC,
    COL_MOVED_QTY,
    COL_DEL_TYPE,
];

// ============================================================================
// FILTER CONSTANTS
// ============================================================================

/// Substring in TO_LOC marking a buffer destination.
pub const BUFFER_MARKER: &str = "Buffer";
/// Article numbers are zero-padded to this width so the Code 128 symbology
/// encodes a fixed-width payload.
pub const ARTNO_WIDTH: usize = 8;

// ============================================================================
// STYLE CONSTANTS
// ============================================================================

/// Barcode display font for the article column.
pub const BARCODE_FONT: &str = "Libre Barcode 128 Text";
pub const BARCODE_FONT_SIZE: u8 = 22;
/// Human-readable font for the article header on the label sheet.
pub const LABEL_HEADER_FONT: &str = "Calibri";
pub const LABEL_HEADER_FONT_SIZE: u8 = 11;
/// Header font size of the rendered label grid.
pub const RENDER_HEADER_FONT_SIZE: u8 = 12;

/// Fixed pixel width of the article column.
pub const ARTNO_WIDTH_PX: f64 = 120.0;
/// Excel width units are roughly 7 pixels each.
pub const PX_PER_WIDTH_UNIT: f64 = 7.0;
/// Extra width units added on top of the longest value when autofitting.
pub const AUTOFIT_PADDING: f64 = 2.0;

/// Uniform margin of the printed label sheet, in inches.
pub const LABEL_MARGIN: f64 = 0.25;
/// Uniform row height of the rendered label grid, in points.
pub const RENDER_ROW_HEIGHT: f64 = 30.0;

// ============================================================================
// SCHEMA ERRORS
// ============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required column missing from input sheet: {0}")]
    MissingColumn(&'static str),
}

/// Resolves a required column or fails before any transformation work.
pub fn require_column(table: &Table, name: &'static str) -> Result<usize, SchemaError> {
    table
        .column_index(name)
        .ok_or(SchemaError::MissingColumn(name))
}
