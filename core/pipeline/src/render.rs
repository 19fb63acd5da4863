//! FILENAME: core/pipeline/src/render.rs
//! PURPOSE: Turns the label sheet into an immutable render model.
//! CONTEXT: Fourth pipeline stage. Re-sorts the rows into the presentation
//! order used on the printed page and fixes the grid geometry (uniform row
//! height) and style regions. The model cannot be mutated after
//! construction; `to_sheet` materializes it for the exporter.
//!
//! The sort here compares every key component as a display string, so
//! "100" orders before "99". That matches the source system's label
//! ordering and intentionally differs from the numeric pick-walk sort in
//! the filter stage (see DESIGN.md).

use crate::schema::{
    BARCODE_FONT, BARCODE_FONT_SIZE, COL_ARTNO, COL_HFB, COL_PA, COL_SLID_H, LABEL_MARGIN,
    RENDER_HEADER_FONT_SIZE, RENDER_ROW_HEIGHT,
};
use engine::{
    CellStyle, CellValue, FontStyle, Margins, Orientation, PageSetup, Sheet, TextAlign,
    VerticalAlign,
};
use tracing::debug;

/// The finished layout of the printed label table: header, re-sorted rows,
/// grid geometry and column metadata. Immutable once built.
#[derive(Debug, Clone)]
pub struct RenderModel {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    column_widths: Vec<Option<f64>>,
    hidden_columns: Vec<bool>,
    row_height: f64,
}

/// Builds the render model from the label sheet.
pub fn render_model(label_sheet: &Sheet) -> RenderModel {
    let column_count = if label_sheet.is_empty() {
        0
    } else {
        label_sheet.max_col() + 1
    };

    let columns: Vec<String> = (0..column_count)
        .map(|col| label_sheet.display_value(0, col))
        .collect();

    let mut rows: Vec<Vec<CellValue>> = (1..=label_sheet.max_row())
        .map(|row| {
            (0..column_count)
                .map(|col| label_sheet.value(row, col))
                .collect()
        })
        .collect();

    let headers = label_sheet.header_map();
    let sort_cols: Vec<Option<u32>> = [COL_HFB, COL_PA, COL_SLID_H]
        .iter()
        .map(|name| headers.get(*name).copied())
        .collect();

    // Decorate-sort-undecorate keeps the string keys out of the comparator.
    let mut keyed: Vec<(Vec<String>, Vec<CellValue>)> = rows
        .drain(..)
        .map(|row| (sort_key(&row, &sort_cols), row))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let rows: Vec<Vec<CellValue>> = keyed.into_iter().map(|(_, row)| row).collect();
    debug!(rows = rows.len(), columns = columns.len(), "built render model");

    RenderModel {
        column_widths: (0..column_count)
            .map(|col| label_sheet.column_width(col))
            .collect(),
        hidden_columns: (0..column_count)
            .map(|col| label_sheet.is_column_hidden(col))
            .collect(),
        columns,
        rows,
        row_height: RENDER_ROW_HEIGHT,
    }
}

/// Stringified (HFB, PA, SLID_H); a missing component contributes "".
fn sort_key(row: &[CellValue], sort_cols: &[Option<u32>]) -> Vec<String> {
    sort_cols
        .iter()
        .map(|col| match col {
            Some(c) => row
                .get(*c as usize)
                .map(CellValue::display)
                .unwrap_or_default(),
            None => String::new(),
        })
        .collect()
}

impl RenderModel {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Materializes the model as a styled sheet ready for export:
    /// centered grid, bold header, barcode font on the article data cells
    /// (top-aligned so the bars hang from the cell top), everything else
    /// middle-aligned.
    pub fn to_sheet(&self, name: &str) -> Sheet {
        let mut sheet = Sheet::new(name);

        let header_style = CellStyle::new()
            .with_font(FontStyle {
                family: FontStyle::default().family,
                size: RENDER_HEADER_FONT_SIZE,
                bold: true,
            })
            .with_text_align(TextAlign::Center)
            .with_vertical_align(VerticalAlign::Middle);
        let body_style = CellStyle::new()
            .with_text_align(TextAlign::Center)
            .with_vertical_align(VerticalAlign::Middle);
        let barcode_style = CellStyle::new()
            .with_font(FontStyle::new(BARCODE_FONT, BARCODE_FONT_SIZE))
            .with_text_align(TextAlign::Center)
            .with_vertical_align(VerticalAlign::Top);

        let artno_col = self.columns.iter().position(|c| c == COL_ARTNO);

        for (col, text) in self.columns.iter().enumerate() {
            sheet.set_value(
                0,
                col as u32,
                CellValue::Text(text.clone()),
                header_style.clone(),
            );
        }
        for (row, values) in self.rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                let style = if Some(col) == artno_col {
                    barcode_style.clone()
                } else {
                    body_style.clone()
                };
                sheet.set_value((row + 1) as u32, col as u32, value.clone(), style);
            }
        }

        for row in 0..=self.rows.len() as u32 {
            sheet.set_row_height(row, self.row_height);
        }
        for (col, width) in self.column_widths.iter().enumerate() {
            if let Some(width) = width {
                sheet.set_column_width(col as u32, *width);
            }
        }
        for (col, hidden) in self.hidden_columns.iter().enumerate() {
            if *hidden {
                sheet.set_column_hidden(col as u32);
            }
        }

        sheet.set_page(PageSetup {
            orientation: Orientation::Landscape,
            margins: Margins::uniform(LABEL_MARGIN),
        });
        sheet
    }
}
