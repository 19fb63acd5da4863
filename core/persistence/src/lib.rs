//! FILENAME: core/persistence/src/lib.rs
//! Prenote Persistence Module
//!
//! Handles loading the input workbook and saving processed sheets in XLSX
//! format.

mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use error::PersistenceError;
pub use xlsx_reader::load_table;
pub use xlsx_writer::save_workbook;
