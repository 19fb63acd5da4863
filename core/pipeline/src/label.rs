//! FILENAME: core/pipeline/src/label.rs
//! PURPOSE: Derives the compact label sheet from the presentation sheet.
//! CONTEXT: Third pipeline stage. Projects the fixed label column set, in
//! label order, copying per-cell fonts and alignment. Header cells and
//! non-empty data cells get a full thin border; the article header is
//! forced back to a readable font because it is a caption, not barcode
//! payload. The result shares no state with the source sheet.

use crate::schema::{
    COL_ARTNO, LABEL_COLUMNS, LABEL_HEADER_FONT, LABEL_HEADER_FONT_SIZE, LABEL_MARGIN,
    SHEET_LABELS,
};
use engine::{Borders, FontStyle, Margins, Orientation, PageSetup, Sheet};
use tracing::debug;

/// Projects the label columns of the presentation sheet into a new sheet
/// laid out for printing. Wanted columns missing from the source are
/// silently skipped; output order always follows the label column list.
pub fn derive_label_sheet(source: &Sheet) -> Sheet {
    let mut sheet = Sheet::new(SHEET_LABELS);
    let headers = source.header_map();

    let mut dest_col: u32 = 0;
    for name in LABEL_COLUMNS {
        let Some(&src_col) = headers.get(name) else {
            debug!(column = name, "label column absent, skipping");
            continue;
        };

        copy_header(source, &mut sheet, src_col, dest_col, name);
        copy_data(source, &mut sheet, src_col, dest_col);

        if let Some(width) = source.column_width(src_col) {
            sheet.set_column_width(dest_col, width);
        }
        if source.is_column_hidden(src_col) {
            sheet.set_column_hidden(dest_col);
        }

        dest_col += 1;
    }

    sheet.set_page(PageSetup {
        orientation: Orientation::Landscape,
        margins: Margins::uniform(LABEL_MARGIN),
    });
    sheet
}

fn copy_header(source: &Sheet, sheet: &mut Sheet, src_col: u32, dest_col: u32, name: &str) {
    let Some(cell) = source.get_cell(0, src_col) else {
        return;
    };
    let mut style = source.style_of(cell).clone();
    if name == COL_ARTNO {
        // The header is a caption and must stay human-readable.
        style.font = FontStyle::new(LABEL_HEADER_FONT, LABEL_HEADER_FONT_SIZE);
    }
    style.borders = Borders::full_thin();
    sheet.set_value(0, dest_col, cell.value.clone(), style);
}

fn copy_data(source: &Sheet, sheet: &mut Sheet, src_col: u32, dest_col: u32) {
    for row in 1..=source.max_row() {
        let Some(cell) = source.get_cell(row, src_col) else {
            continue;
        };
        let mut style = source.style_of(cell).clone();
        // Gridlines only around cells that hold a value.
        style.borders = if cell.value.is_empty() {
            Borders::default()
        } else {
            Borders::full_thin()
        };
        sheet.set_value(row, dest_col, cell.value.clone(), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::presentation_sheet;
    use crate::schema::{BARCODE_FONT, COL_DEL_TYPE};
    use engine::{CellValue, Table, TextAlign};

    fn source_sheet(columns: &[&str], rows: Vec<Vec<CellValue>>) -> Sheet {
        let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row);
        }
        presentation_sheet(&table)
    }

    fn label_headers(sheet: &Sheet) -> Vec<String> {
        (0..=sheet.max_col())
            .map(|col| sheet.display_value(0, col))
            .collect()
    }

    #[test]
    fn projects_label_columns_in_fixed_order() {
        // Source order scrambled relative to the label order.
        let sheet = source_sheet(
            &["MOVED_QTY", "ARTNO", "EXTRA", "HFB", "ARTNAME"],
            vec![vec![
                CellValue::Number(2.0),
                CellValue::Text("00000123".to_string()),
                CellValue::Text("x".to_string()),
                CellValue::Number(14.0),
                CellValue::Text("BILLY".to_string()),
            ]],
        );
        let labels = derive_label_sheet(&sheet);

        assert_eq!(
            label_headers(&labels),
            vec!["ARTNO", "ARTNAME", "HFB", "MOVED_QTY"]
        );
    }

    #[test]
    fn absent_wanted_columns_are_skipped_silently() {
        let sheet = source_sheet(
            &["ARTNO", "MOVED_QTY"],
            vec![vec![
                CellValue::Text("00000123".to_string()),
                CellValue::Number(1.0),
            ]],
        );
        let labels = derive_label_sheet(&sheet);
        assert_eq!(label_headers(&labels), vec!["ARTNO", "MOVED_QTY"]);
    }

    #[test]
    fn article_header_font_is_readable_data_cells_keep_barcode() {
        let sheet = source_sheet(
            &["ARTNO", "ARTNAME"],
            vec![vec![
                CellValue::Text("00000123".to_string()),
                CellValue::Text("BILLY".to_string()),
            ]],
        );
        let labels = derive_label_sheet(&sheet);

        let header = labels.get_cell(0, 0).unwrap();
        assert_eq!(labels.style_of(header).font.family, LABEL_HEADER_FONT);

        let data = labels.get_cell(1, 0).unwrap();
        assert_eq!(labels.style_of(data).font.family, BARCODE_FONT);
    }

    #[test]
    fn borders_follow_cell_content() {
        let sheet = source_sheet(
            &["ARTNO", "ARTNAME"],
            vec![vec![
                CellValue::Text("00000123".to_string()),
                CellValue::Empty,
            ]],
        );
        let labels = derive_label_sheet(&sheet);

        let header = labels.get_cell(0, 1).unwrap();
        assert_eq!(labels.style_of(header).borders, Borders::full_thin());

        let filled = labels.get_cell(1, 0).unwrap();
        assert_eq!(labels.style_of(filled).borders, Borders::full_thin());

        let empty = labels.get_cell(1, 1).unwrap();
        assert!(labels.style_of(empty).borders.is_none());
    }

    #[test]
    fn copies_column_width_and_replaces_delivery_border() {
        let sheet = source_sheet(
            &["ARTNO", "DEL_TYPE"],
            vec![vec![
                CellValue::Text("00000123".to_string()),
                CellValue::Text("TR".to_string()),
            ]],
        );
        let labels = derive_label_sheet(&sheet);

        // Width travels with the projected column.
        assert_eq!(labels.column_width(0), sheet.column_width(0));
        let src_col = sheet.header_map()[COL_DEL_TYPE];
        assert_eq!(labels.column_width(1), sheet.column_width(src_col));

        // The lone right border becomes a full box on the label sheet.
        let cell = labels.get_cell(1, 1).unwrap();
        assert_eq!(labels.style_of(cell).borders, Borders::full_thin());
    }

    #[test]
    fn page_is_landscape_with_uniform_quarter_margins() {
        let sheet = source_sheet(
            &["ARTNO"],
            vec![vec![CellValue::Text("00000123".to_string())]],
        );
        let labels = derive_label_sheet(&sheet);

        assert_eq!(labels.page().orientation, Orientation::Landscape);
        assert_eq!(labels.page().margins, Margins::uniform(0.25));
    }

    #[test]
    fn alignment_is_copied_from_source_cells() {
        let sheet = source_sheet(
            &["ARTNO", "ARTNAME"],
            vec![vec![
                CellValue::Text("00000123".to_string()),
                CellValue::Text("BILLY".to_string()),
            ]],
        );
        let labels = derive_label_sheet(&sheet);
        let cell = labels.get_cell(1, 1).unwrap();
        assert_eq!(labels.style_of(cell).text_align, TextAlign::Center);
    }
}
