//! Row and cell replication.
//!
//! These transforms blow a single row up into a square table, or a
//! single cell up into a row. All of them clone cells freely; the
//! persistent backing keeps every clone O(1), so an N-element input
//! costs N pointer copies, not N deep copies.

use tablature_foundation::{Result, Row, Value};
use tablature_grid::Table;

/// A row of `count` copies of one value.
fn repeated(value: &Value, count: usize) -> Row {
    (0..count).map(|_| value.clone()).collect()
}

/// Builds a square table whose every row is a copy of `row`.
///
/// The result has `row.len()` rows, each deep-equal to the input. An
/// empty row yields an empty table.
#[must_use]
pub fn replicate_table(row: &Row) -> Table {
    (0..row.len()).map(|_| row.clone()).collect()
}

/// Builds a square table whose row `i` repeats element `i` of `row`.
///
/// Each source element is spread across its own row: row `i` holds
/// `row.len()` copies of `row[i]`. An empty row yields an empty table.
#[must_use]
pub fn broadcast_table(row: &Row) -> Table {
    row.iter()
        .map(|value| repeated(value, row.len()))
        .collect()
}

/// Builds a row of `row.len()` copies of the element at `index`.
///
/// An empty row yields an empty row for any `index`; emptiness wins
/// over bounds checking.
///
/// # Errors
///
/// Returns `IndexOutOfBounds` when the row is non-empty and `index` is
/// past its last element.
pub fn broadcast_row(row: &Row, index: usize) -> Result<Row> {
    if row.is_empty() {
        return Ok(Row::new());
    }
    let value = row.at(index)?;
    Ok(repeated(value, row.len()))
}
