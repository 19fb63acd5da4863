//! FILENAME: core/pipeline/src/lib.rs
//! Prenote transformation pipeline.
//!
//! The four pure stages between the loaded workbook and the exporter:
//! - `filter`: row exclusion/inclusion, pick-walk sort, article padding
//! - `rewrite`: the styled presentation sheet
//! - `label`: projection into the compact label sheet
//! - `render`: presentation re-sort and the immutable render model
//!
//! Each stage consumes the previous stage's value and builds a fresh one;
//! nothing is shared or mutated across stage boundaries.

pub mod filter;
pub mod label;
pub mod render;
pub mod rewrite;
pub mod schema;

pub use filter::filter_table;
pub use label::derive_label_sheet;
pub use render::{render_model, RenderModel};
pub use rewrite::presentation_sheet;
pub use schema::{SchemaError, LABEL_COLUMNS, SHEET_DATA, SHEET_LABELS};
