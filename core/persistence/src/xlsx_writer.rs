//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::PersistenceError;
use engine::{
    BorderLineStyle, CellStyle, CellValue, Orientation, Sheet, TextAlign, VerticalAlign,
};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook as XlsxWorkbook};
use std::path::Path;
use tracing::debug;

/// Serializes the given sheets into one XLSX workbook, in order.
pub fn save_workbook(sheets: &[Sheet], path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();

    for sheet in sheets {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        if sheet.page().orientation == Orientation::Landscape {
            worksheet.set_landscape();
        }
        let m = sheet.page().margins;
        worksheet.set_margins(m.left, m.right, m.top, m.bottom, m.header, m.footer);

        // Set column widths (Excel character units)
        let mut widths: Vec<_> = sheet.column_widths().iter().collect();
        widths.sort_by_key(|(col, _)| **col);
        for (col, width) in widths {
            worksheet.set_column_width(*col as u16, *width)?;
        }

        let mut hidden: Vec<_> = sheet.hidden_columns().iter().collect();
        hidden.sort();
        for col in hidden {
            worksheet.set_column_hidden(*col as u16)?;
        }

        // Set row heights (points)
        let mut heights: Vec<_> = sheet.row_heights().iter().collect();
        heights.sort_by_key(|(row, _)| **row);
        for (row, height) in heights {
            worksheet.set_row_height(*row, *height)?;
        }

        // Write cells in row/col order so identical input yields an
        // identical artifact.
        let mut cells: Vec<_> = sheet.cells().iter().collect();
        cells.sort_by_key(|((row, col), _)| (*row, *col));

        for (&(row, col), cell) in cells {
            let format = convert_style_to_format(sheet.style_of(cell));

            match &cell.value {
                CellValue::Empty => {
                    // A blank cell only matters when it carries formatting.
                    if cell.style_index > 0 {
                        worksheet.write_blank(row, col as u16, &format)?;
                    }
                }
                CellValue::Number(n) => {
                    worksheet.write_number_with_format(row, col as u16, *n, &format)?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string_with_format(row, col as u16, s, &format)?;
                }
                CellValue::Boolean(b) => {
                    worksheet.write_boolean_with_format(row, col as u16, *b, &format)?;
                }
            }
        }
    }

    xlsx.save(path)?;
    debug!(sheets = sheets.len(), path = %path.display(), "saved workbook");
    Ok(())
}

fn convert_style_to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    // Font settings
    format = format.set_font_name(&style.font.family);
    format = format.set_font_size(style.font.size as f64);
    if style.font.bold {
        format = format.set_bold();
    }

    // Horizontal alignment
    format = format.set_align(match style.text_align {
        TextAlign::Left => FormatAlign::Left,
        TextAlign::Center => FormatAlign::Center,
        TextAlign::Right => FormatAlign::Right,
        TextAlign::General => FormatAlign::General,
    });

    // Vertical alignment
    format = format.set_align(match style.vertical_align {
        VerticalAlign::Top => FormatAlign::Top,
        VerticalAlign::Middle => FormatAlign::VerticalCenter,
        VerticalAlign::Bottom => FormatAlign::Bottom,
    });

    // Borders
    format = format.set_border_top(convert_border(style.borders.top));
    format = format.set_border_right(convert_border(style.borders.right));
    format = format.set_border_bottom(convert_border(style.borders.bottom));
    format = format.set_border_left(convert_border(style.borders.left));

    format
}

fn convert_border(line: BorderLineStyle) -> FormatBorder {
    match line {
        BorderLineStyle::None => FormatBorder::None,
        BorderLineStyle::Thin => FormatBorder::Thin,
    }
}
