//! Cyclic rotation of rows.
//!
//! Rotation re-reads a row as a cycle starting from an anchor element.
//! With an anchor, a count, and an exclusion list this is enough to
//! turn one reference sequence into a family of derived sequences; the
//! motivating case is rotating a chromatic note run to a tonic and
//! dropping the non-scale steps.

use tablature_foundation::{Error, Result, Row, Value};
use tablature_grid::Table;

/// The rotation target: where position 0 of the rotated row comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum Anchor {
    /// The first element equal to this value.
    Value(Value),
    /// The element at this position in the unrotated row.
    Index(usize),
}

impl Anchor {
    /// Creates an anchor matching the first element equal to `value`.
    #[must_use]
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Creates an anchor at a fixed position in the unrotated row.
    #[must_use]
    pub const fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Resolves this anchor to a position in `row`.
    fn resolve(&self, row: &Row) -> Result<usize> {
        match self {
            Self::Value(value) => row
                .iter()
                .position(|cell| cell == value)
                .ok_or_else(|| Error::anchor_not_found(value.clone())),
            Self::Index(index) => {
                if *index < row.len() {
                    Ok(*index)
                } else {
                    Err(Error::index_out_of_bounds(*index, row.len()))
                }
            }
        }
    }
}

impl From<Value> for Anchor {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Rotates `row` so the anchored element is at position 0.
///
/// The result has the same length as the input, with cyclic order
/// preserved: element `k` of the result is element `(p + k) % n` of the
/// input, where `p` is the anchor position. An empty row yields an
/// empty row without consulting the anchor.
///
/// # Errors
///
/// Returns `AnchorNotFound` when a value anchor matches no element and
/// `IndexOutOfBounds` when an index anchor is out of range. Callers
/// that want the empty-row convention can `unwrap_or_default()`.
pub fn rotate(row: &Row, anchor: &Anchor) -> Result<Row> {
    rotate_to(row, anchor, row.len())
}

/// Rotates `row` to the anchor, then reads exactly `count` elements
/// from the cycle.
///
/// A `count` below the row length truncates; above it, the cycle wraps
/// and elements repeat. An empty row yields an empty row regardless of
/// `count`, without consulting the anchor.
///
/// # Errors
///
/// Reports as [`rotate`].
pub fn rotate_to(row: &Row, anchor: &Anchor, count: usize) -> Result<Row> {
    if row.is_empty() {
        return Ok(Row::new());
    }
    let start = anchor.resolve(row)?;
    let len = row.len();
    let mut cells = Row::new();
    for offset in 0..count {
        // Reduce before adding so the sum cannot overflow.
        let index = (start + offset % len) % len;
        cells.push(row.at(index)?.clone());
    }
    Ok(cells)
}

/// Rotates `row` to the anchor, then drops the listed positions of the
/// rotated sequence.
///
/// Positions in `exclude` refer to the rotated row, not the input; out
/// of range positions are ignored. This is the scale generator: rotate
/// a chromatic run to its tonic, drop the non-scale steps.
///
/// # Errors
///
/// Reports as [`rotate`].
pub fn rotate_excluding(row: &Row, anchor: &Anchor, exclude: &[usize]) -> Result<Row> {
    if row.is_empty() {
        return Ok(Row::new());
    }
    let rotated = rotate(row, anchor)?;
    Ok(rotated
        .iter()
        .enumerate()
        .filter(|(position, _)| !exclude.contains(position))
        .map(|(_, value)| value.clone())
        .collect())
}

/// Rotates `row` left by `shift` positions, wrapping cyclically.
///
/// `shift` is taken modulo the row length, so any shift is valid;
/// `spin_row(row, 0)` is the identity. An empty row yields an empty
/// row.
#[must_use]
pub fn spin_row(row: &Row, shift: usize) -> Row {
    if row.is_empty() {
        return Row::new();
    }
    let shift = shift % row.len();
    row.iter()
        .skip(shift)
        .chain(row.iter().take(shift))
        .cloned()
        .collect()
}

/// Builds the table of every left rotation of `row`.
///
/// The result is square: one row per element, row `i` being `row`
/// rotated left by `i`, so row 0 is the input itself. An empty row
/// yields an empty table.
#[must_use]
pub fn spin_table(row: &Row) -> Table {
    (0..row.len()).map(|shift| spin_row(row, shift)).collect()
}
