//! FILENAME: core/pipeline/src/rewrite.rs
//! PURPOSE: Builds the presentation sheet from the filtered table.
//! CONTEXT: Second pipeline stage. The filtered rows are written below the
//! header, everything is centered, the article column gets the barcode font
//! and a fixed width, non-label columns are hidden (not deleted), the other
//! visible columns are autofit, and the delivery-type column gets a
//! full-height right border.

use crate::schema::{
    ARTNO_WIDTH_PX, AUTOFIT_PADDING, BARCODE_FONT, BARCODE_FONT_SIZE, COL_ARTNO, COL_DEL_TYPE,
    LABEL_COLUMNS, PX_PER_WIDTH_UNIT, SHEET_DATA,
};
use engine::{
    BorderLineStyle, CellStyle, CellValue, FontStyle, Sheet, Table, TextAlign, VerticalAlign,
};
use tracing::debug;

/// Builds a fresh presentation sheet from the filtered table.
/// Rebuilding from the same table yields an identical sheet.
pub fn presentation_sheet(table: &Table) -> Sheet {
    let mut sheet = Sheet::new(SHEET_DATA);

    let centered = CellStyle::new()
        .with_text_align(TextAlign::Center)
        .with_vertical_align(VerticalAlign::Middle);
    let barcode = centered
        .clone()
        .with_font(FontStyle::new(BARCODE_FONT, BARCODE_FONT_SIZE));

    let artno_col = table.column_index(COL_ARTNO);
    let style_for = |col: usize| {
        if Some(col) == artno_col {
            barcode.clone()
        } else {
            centered.clone()
        }
    };

    // Header row, then the data rows in table order.
    for (col, name) in table.columns().iter().enumerate() {
        sheet.set_value(0, col as u32, CellValue::Text(name.clone()), style_for(col));
    }
    for (row, values) in table.rows().iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            sheet.set_value((row + 1) as u32, col as u32, value.clone(), style_for(col));
        }
    }

    hide_non_label_columns(&mut sheet, table);
    size_columns(&mut sheet, table, artno_col);
    outline_delivery_type(&mut sheet, table);

    sheet
}

/// Columns that do not appear on the printed label stay in the workbook but
/// are not shown.
fn hide_non_label_columns(sheet: &mut Sheet, table: &Table) {
    for (col, name) in table.columns().iter().enumerate() {
        if !LABEL_COLUMNS.contains(&name.as_str()) {
            sheet.set_column_hidden(col as u32);
        }
    }
}

/// The article column gets its fixed barcode width; every other visible
/// column is autofit to its longest display value plus padding.
fn size_columns(sheet: &mut Sheet, table: &Table, artno_col: Option<usize>) {
    for col in 0..table.column_count() {
        if Some(col) == artno_col {
            sheet.set_column_width(col as u32, ARTNO_WIDTH_PX / PX_PER_WIDTH_UNIT);
            continue;
        }
        if sheet.is_column_hidden(col as u32) {
            continue;
        }
        let longest = longest_display_len(table, col);
        sheet.set_column_width(col as u32, longest as f64 + AUTOFIT_PADDING);
    }
}

fn longest_display_len(table: &Table, col: usize) -> usize {
    let header_len = table.columns()[col].len();
    table
        .rows()
        .iter()
        .map(|row| row[col].display().len())
        .max()
        .unwrap_or(0)
        .max(header_len)
}

/// A thin right border along the full height of the delivery-type column.
/// Absent column: nothing to outline, not an error.
fn outline_delivery_type(sheet: &mut Sheet, table: &Table) {
    let Some(col) = table.column_index(COL_DEL_TYPE) else {
        debug!("no delivery-type column, skipping border");
        return;
    };
    for row in 0..=sheet.max_row() {
        sheet.restyle(row, col as u32, |style| {
            style.borders.right = BorderLineStyle::Thin;
        });
    }
}
