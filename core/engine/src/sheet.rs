//! FILENAME: core/engine/src/sheet.rs
//! PURPOSE: Manages the collection of cells of one worksheet.
//! CONTEXT: This file defines the `Sheet` struct which acts as the container
//! for presentation data. It uses a sparse storage strategy (HashMap) and
//! carries the per-column metadata (width, hidden flag), per-row heights,
//! the style registry the cells index into, and the page setup used when
//! the sheet is serialized for printing.

use crate::cell::{Cell, CellValue};
use crate::style::{CellStyle, StyleRegistry};
use std::collections::{HashMap, HashSet};

/// Page orientation for printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page margins in inches, including the header/footer strips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub header: f64,
    pub footer: f64,
}

impl Margins {
    /// The same margin on all six slots.
    pub const fn uniform(value: f64) -> Self {
        Margins {
            left: value,
            right: value,
            top: value,
            bottom: value,
            header: value,
            footer: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        // Excel's "Normal" margin preset.
        Margins {
            left: 0.7,
            right: 0.7,
            top: 0.75,
            bottom: 0.75,
            header: 0.3,
            footer: 0.3,
        }
    }
}

/// Page layout applied when the sheet is exported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageSetup {
    pub orientation: Orientation,
    pub margins: Margins,
}

/// A single worksheet: sparse cells plus column/row metadata.
/// Row 0 is the header row; data rows follow.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    /// Sparse storage: keys are (row, col), values are Cell instances.
    /// Row and Col are 0-based indices.
    cells: HashMap<(u32, u32), Cell>,
    /// Tracks the highest row index currently in use.
    max_row: u32,
    /// Tracks the highest column index currently in use.
    max_col: u32,
    styles: StyleRegistry,
    /// Column widths in Excel character units.
    column_widths: HashMap<u32, f64>,
    hidden_columns: HashSet<u32>,
    /// Row heights in points.
    row_heights: HashMap<u32, f64>,
    page: PageSetup,
}

impl Sheet {
    /// Creates a new, empty Sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Sheet {
            name: name.into(),
            cells: HashMap::new(),
            max_row: 0,
            max_col: 0,
            styles: StyleRegistry::new(),
            column_widths: HashMap::new(),
            hidden_columns: HashSet::new(),
            row_heights: HashMap::new(),
            page: PageSetup::default(),
        }
    }

    /// Sets a cell at the specified coordinates.
    /// Updates max_row/max_col boundaries automatically.
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        if row > self.max_row {
            self.max_row = row;
        }
        if col > self.max_col {
            self.max_col = col;
        }
        self.cells.insert((row, col), cell);
    }

    /// Sets a value with a style, interning the style in the registry.
    pub fn set_value(&mut self, row: u32, col: u32, value: CellValue, style: CellStyle) {
        let style_index = self.styles.get_or_create(style);
        self.set_cell(row, col, Cell::styled(value, style_index));
    }

    /// Retrieves a reference to a cell at the specified coordinates.
    /// Returns None if the cell is empty (not stored).
    pub fn get_cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// The stored value at the coordinates, or Empty when unset.
    pub fn value(&self, row: u32, col: u32) -> CellValue {
        self.get_cell(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// The display string at the coordinates ("" when unset).
    pub fn display_value(&self, row: u32, col: u32) -> String {
        self.get_cell(row, col)
            .map(Cell::display_value)
            .unwrap_or_default()
    }

    /// Rewrites the style of one cell through a closure.
    /// A missing cell is created empty so column-wide styling (e.g. a
    /// full-height border) covers unset cells too.
    pub fn restyle(&mut self, row: u32, col: u32, f: impl FnOnce(&mut CellStyle)) {
        let current = match self.cells.get(&(row, col)) {
            Some(cell) => self.styles.get(cell.style_index).clone(),
            None => self.styles.get(0).clone(),
        };
        let mut updated = current;
        f(&mut updated);
        let style_index = self.styles.get_or_create(updated);
        match self.cells.get_mut(&(row, col)) {
            Some(cell) => cell.style_index = style_index,
            None => self.set_cell(row, col, Cell::styled(CellValue::Empty, style_index)),
        }
    }

    /// The style of a cell, resolved through the registry.
    pub fn style_of(&self, cell: &Cell) -> &CellStyle {
        self.styles.get(cell.style_index)
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn cells(&self) -> &HashMap<(u32, u32), Cell> {
        &self.cells
    }

    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    pub fn max_col(&self) -> u32 {
        self.max_col
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ========================================================================
    // COLUMN / ROW METADATA
    // ========================================================================

    pub fn set_column_width(&mut self, col: u32, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub fn column_widths(&self) -> &HashMap<u32, f64> {
        &self.column_widths
    }

    pub fn set_column_hidden(&mut self, col: u32) {
        self.hidden_columns.insert(col);
    }

    pub fn is_column_hidden(&self, col: u32) -> bool {
        self.hidden_columns.contains(&col)
    }

    pub fn hidden_columns(&self) -> &HashSet<u32> {
        &self.hidden_columns
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    pub fn row_heights(&self) -> &HashMap<u32, f64> {
        &self.row_heights
    }

    pub fn page(&self) -> &PageSetup {
        &self.page
    }

    pub fn set_page(&mut self, page: PageSetup) {
        self.page = page;
    }

    // ========================================================================
    // HEADER LOOKUP
    // ========================================================================

    /// Builds the header text -> column index map from row 0.
    /// Built once per consumer instead of re-scanning the header row for
    /// every lookup. First occurrence wins for duplicate headers.
    pub fn header_map(&self) -> HashMap<String, u32> {
        let mut map = HashMap::new();
        for col in 0..=self.max_col {
            let text = self.display_value(0, col);
            if !text.is_empty() {
                map.entry(text).or_insert(col);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BorderLineStyle, TextAlign};

    #[test]
    fn set_value_tracks_bounds() {
        let mut sheet = Sheet::new("Data");
        sheet.set_value(3, 2, CellValue::Number(1.0), CellStyle::new());
        assert_eq!(sheet.max_row(), 3);
        assert_eq!(sheet.max_col(), 2);
    }

    #[test]
    fn set_value_interns_styles() {
        let mut sheet = Sheet::new("Data");
        let centered = CellStyle::new().with_text_align(TextAlign::Center);
        sheet.set_value(0, 0, CellValue::Number(1.0), centered.clone());
        sheet.set_value(0, 1, CellValue::Number(2.0), centered);
        // default + centered
        assert_eq!(sheet.styles().len(), 2);
    }

    #[test]
    fn restyle_preserves_value_and_adds_border() {
        let mut sheet = Sheet::new("Data");
        sheet.set_value(0, 0, CellValue::Text("DEL_TYPE".to_string()), CellStyle::new());
        sheet.restyle(0, 0, |s| s.borders.right = BorderLineStyle::Thin);

        let cell = sheet.get_cell(0, 0).unwrap();
        assert_eq!(cell.value, CellValue::Text("DEL_TYPE".to_string()));
        assert_eq!(sheet.style_of(cell).borders.right, BorderLineStyle::Thin);
    }

    #[test]
    fn restyle_creates_missing_cells() {
        let mut sheet = Sheet::new("Data");
        sheet.restyle(5, 1, |s| s.borders.right = BorderLineStyle::Thin);
        let cell = sheet.get_cell(5, 1).unwrap();
        assert!(cell.value.is_empty());
        assert_eq!(sheet.style_of(cell).borders.right, BorderLineStyle::Thin);
    }

    #[test]
    fn header_map_resolves_by_text() {
        let mut sheet = Sheet::new("Data");
        sheet.set_value(0, 0, CellValue::Text("ARTNO".to_string()), CellStyle::new());
        sheet.set_value(0, 2, CellValue::Text("HFB".to_string()), CellStyle::new());
        let map = sheet.header_map();
        assert_eq!(map.get("HFB"), Some(&2));
        assert_eq!(map.get("ARTNO"), Some(&0));
        assert!(!map.contains_key(""));
    }
}
