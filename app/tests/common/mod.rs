//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for prenote integration tests.

use convert::{ConversionError, DocumentExporter};
use engine::Sheet;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Cell payload for fixture workbooks.
pub enum V {
    N(f64),
    S(&'static str),
    Blank,
}

/// The input schema used by the fixtures: the nine label columns plus an
/// internal column the pipeline must hide.
pub const FULL_HEADER: [&str; 10] = [
    "ARTNO", "ARTNAME", "HFB", "PA", "SLID_P", "SLID_H", "TO_LOC", "MOVED_QTY", "DEL_TYPE",
    "INTERNAL_REF",
];

/// Writes a single-sheet fixture workbook.
pub fn write_workbook(path: &Path, sheet_name: &str, header: &[&str], rows: &[Vec<V>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();

    for (col, name) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name).unwrap();
    }
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            match value {
                V::N(n) => {
                    worksheet
                        .write_number((row + 1) as u32, col as u16, *n)
                        .unwrap();
                }
                V::S(s) => {
                    worksheet
                        .write_string((row + 1) as u32, col as u16, *s)
                        .unwrap();
                }
                V::Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

#[allow(clippy::too_many_arguments)]
pub fn move_row(
    artno: f64,
    hfb: f64,
    pa: f64,
    slid_p: f64,
    slid_h: &'static str,
    to_loc: &'static str,
    qty: f64,
    del_type: &'static str,
) -> Vec<V> {
    vec![
        V::N(artno),
        V::S("BILLY Bookcase"),
        V::N(hfb),
        V::N(pa),
        V::N(slid_p),
        V::S(slid_h),
        V::S(to_loc),
        V::N(qty),
        V::S(del_type),
        V::S("internal"),
    ]
}

/// The canonical scenario: 10 rows, 3 buffer-destined, 2 from area 16;
/// exactly 5 survive the filter.
pub fn standard_rows() -> Vec<Vec<V>> {
    vec![
        move_row(123.0, 14.0, 3.0, 105.0, "7", "A-01", 2.0, "TR"),
        move_row(456.0, 14.0, 3.0, 104.0, "8", "Buffer-01", 1.0, "TR"),
        move_row(789.0, 15.0, 4.0, 103.0, "9", "A-02", 3.0, "DD"),
        move_row(1011.0, 16.0, 4.0, 102.0, "10", "A-03", 1.0, "DD"),
        move_row(1213.0, 15.0, 5.0, 101.0, "11", "High Buffer", 2.0, "TR"),
        move_row(1415.0, 14.0, 5.0, 100.0, "12", "A-04", 4.0, "TR"),
        move_row(1617.0, 16.0, 6.0, 99.0, "13", "A-05", 1.0, "DD"),
        move_row(1819.0, 15.0, 6.0, 98.0, "14", "Buffer", 2.0, "TR"),
        move_row(2021.0, 14.0, 7.0, 97.0, "15", "A-06", 3.0, "DD"),
        move_row(2223.0, 15.0, 7.0, 96.0, "16", "A-07", 1.0, "TR"),
    ]
}

/// Exporter stub that records the sheets instead of shelling out to the
/// external converters.
pub struct CaptureExporter {
    pub sheets: Mutex<Vec<Sheet>>,
}

impl CaptureExporter {
    pub fn new() -> Self {
        CaptureExporter {
            sheets: Mutex::new(Vec::new()),
        }
    }

    pub fn captured(&self) -> Vec<Sheet> {
        self.sheets.lock().unwrap().clone()
    }
}

impl DocumentExporter for CaptureExporter {
    fn export(&self, sheets: &[Sheet], output_dir: &Path) -> Result<PathBuf, ConversionError> {
        *self.sheets.lock().unwrap() = sheets.to_vec();
        let path = output_dir.join("captured.pdf");
        std::fs::write(&path, b"captured")?;
        Ok(path)
    }
}
