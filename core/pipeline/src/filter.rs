//! FILENAME: core/pipeline/src/filter.rs
//! PURPOSE: Row filtering and normalization, the first pipeline stage.
//! CONTEXT: Drops buffer-destined rows, restricts to the picked business
//! areas, sorts into pick-walk order and normalizes article numbers to
//! their fixed barcode width. Pure: the input table is never mutated.

use crate::schema::{
    require_column, SchemaError, ARTNO_WIDTH, BUFFER_MARKER, COL_ARTNO, COL_HFB, COL_SLID_P,
    COL_TO_LOC,
};
use engine::{CellValue, Table};
use std::cmp::Ordering;
use tracing::debug;

/// Business areas whose rows are labeled.
const PICKED_AREAS: [f64; 2] = [14.0, 15.0];

/// Filters, sorts and normalizes the raw move table.
///
/// Rules, in order:
/// - rows whose TO_LOC contains `Buffer` are dropped (missing TO_LOC is kept);
/// - only rows with a numeric HFB of 14 or 15 survive;
/// - survivors are stably sorted ascending by SLID_P;
/// - ARTNO values are stringified and left-zero-padded to 8 characters.
pub fn filter_table(input: &Table) -> Result<Table, SchemaError> {
    let hfb = require_column(input, COL_HFB)?;
    let to_loc = require_column(input, COL_TO_LOC)?;
    let slid_p = require_column(input, COL_SLID_P)?;
    let artno = require_column(input, COL_ARTNO)?;

    let mut rows: Vec<Vec<CellValue>> = input
        .rows()
        .iter()
        .filter(|row| !is_buffer_destination(&row[to_loc]))
        .filter(|row| is_picked_area(&row[hfb]))
        .cloned()
        .collect();

    // Vec::sort_by is stable, so ties keep their input order.
    rows.sort_by(|a, b| compare_slot_ids(&a[slid_p], &b[slid_p]));

    for row in &mut rows {
        row[artno] = pad_article_number(&row[artno]);
    }

    let mut output = Table::new(input.columns().to_vec());
    for row in rows {
        output.push_row(row);
    }

    debug!(
        input_rows = input.row_count(),
        kept_rows = output.row_count(),
        "filtered move rows"
    );
    Ok(output)
}

fn is_buffer_destination(value: &CellValue) -> bool {
    matches!(value, CellValue::Text(s) if s.contains(BUFFER_MARKER))
}

fn is_picked_area(value: &CellValue) -> bool {
    matches!(value, CellValue::Number(n) if PICKED_AREAS.contains(n))
}

/// Orders slot ids numerically when both sides are numbers, otherwise by
/// display string; numbers sort before text so mixed columns still have a
/// total order.
fn compare_slot_ids(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.display().cmp(&b.display()),
    }
}

/// Stringifies an article number and left-pads it with zeros to the fixed
/// barcode width. Longer values pass through untruncated; the operation is
/// idempotent.
pub fn pad_article_number(value: &CellValue) -> CellValue {
    let text = value.display();
    if text.len() >= ARTNO_WIDTH {
        CellValue::Text(text)
    } else {
        CellValue::Text(format!("{:0>width$}", text, width = ARTNO_WIDTH))
    }
}
