// FILENAME: core/persistence/src/xlsx_reader.rs

use crate::PersistenceError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use engine::{CellValue, Table};
use std::path::Path;
use tracing::debug;

/// Loads one worksheet of an XLSX workbook into a `Table`.
/// The first row of the sheet becomes the column schema; remaining rows
/// become data rows.
pub fn load_table(path: &Path, sheet_name: &str) -> Result<Table, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    if !workbook.sheet_names().iter().any(|s| s == sheet_name) {
        return Err(PersistenceError::SheetNotFound(sheet_name.to_string()));
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| {
        PersistenceError::InvalidFormat(format!("sheet '{}' has no header row", sheet_name))
    })?;

    let columns: Vec<String> = header.iter().map(|d| convert_data(d).display()).collect();
    let mut table = Table::new(columns);

    for row in rows {
        table.push_row(row.iter().map(convert_data).collect());
    }

    debug!(
        sheet = sheet_name,
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded worksheet"
    );
    Ok(table)
}

fn convert_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        // Error cells carry no usable data for this pipeline.
        Data::Error(_) => CellValue::Empty,
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
