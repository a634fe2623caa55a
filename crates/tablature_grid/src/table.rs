//! Tables of rows with named columns and keyed row lookups.
//!
//! A [`Table`] owns its rows and two lookup maps: a column-name index
//! maintained by the table itself, and a row-key index populated by the
//! caller. Both resolve names to positions; all position arithmetic
//! stays inside the table.

use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tablature_foundation::{Error, Result, Row, Value};

/// An ordered collection of rows with optional named axes.
///
/// Rows are addressed by position, by caller-assigned key, or by
/// searching a named column for a value. Columns are addressed by
/// position or by name. Tables tolerate ragged rows; the column
/// accessors decide how to report them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// The rows, in insertion order.
    rows: Vec<Row>,
    /// Column names, in declaration order. May be empty.
    column_names: Vec<Arc<str>>,
    /// Name-to-position index over `column_names`. Maintained only by
    /// table methods, in the same call that changes the names.
    column_index: HashMap<Arc<str>, usize>,
    /// Caller-assigned row keys. May be empty; never consulted as a
    /// default.
    row_key_index: HashMap<Arc<str>, usize>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Creates an empty table with no rows and no names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            column_names: Vec::new(),
            column_index: HashMap::new(),
            row_key_index: HashMap::new(),
        }
    }

    /// Creates a table from an iterable of rows.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            column_names: Vec::new(),
            column_index: HashMap::new(),
            row_key_index: HashMap::new(),
        }
    }

    /// Replaces the column names, rebuilding the column index in the
    /// same call.
    ///
    /// With duplicate names the last occurrence wins in the index.
    #[must_use]
    pub fn with_column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        self.column_names = names.into_iter().map(Into::into).collect();
        self.column_index = self
            .column_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        self
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Returns the column names as a slice. Empty when the table was
    /// built without names.
    #[must_use]
    pub fn column_names(&self) -> &[Arc<str>] {
        &self.column_names
    }

    /// Returns the number of named columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Returns a read-only view of the column-name index.
    #[must_use]
    pub const fn column_index(&self) -> &HashMap<Arc<str>, usize> {
        &self.column_index
    }

    /// Returns a read-only view of the row-key index.
    #[must_use]
    pub const fn row_key_index(&self) -> &HashMap<Arc<str>, usize> {
        &self.row_key_index
    }

    /// Gets the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index` is past the last row.
    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows
            .get(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, self.len()))
    }

    /// Gets the row registered under `key` in the row-key index.
    ///
    /// # Errors
    ///
    /// Returns `RowKeyNotFound` if the key is not registered (an empty
    /// index reports the same way, never a default row), and
    /// `IndexOutOfBounds` if the registered position has gone stale and
    /// no longer resolves to a row.
    pub fn row_by_key(&self, key: &str) -> Result<&Row> {
        match self.row_key_index.get(key) {
            Some(&index) => self.row(index),
            None => Err(Error::row_key_not_found(key)),
        }
    }

    /// Finds the first row holding `value` in the column named `column`.
    ///
    /// Rows too short to reach the column are skipped during the scan.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` if no column has that name, and
    /// `ValueNotFound` if no row holds the value in that column.
    pub fn find_row(&self, column: &str, value: &Value) -> Result<&Row> {
        match self.column_index.get(column) {
            Some(&index) => self
                .rows
                .iter()
                .find(|row| row.get(index) == Some(value))
                .ok_or_else(|| Error::value_not_found(column, value.clone())),
            None => Err(Error::column_not_found(column)),
        }
    }

    /// Gathers the cell at `index` from every row into a column vector.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` at the first row too short to reach
    /// the column, reporting that row's length. Short rows are never
    /// padded with placeholder cells.
    pub fn column(&self, index: usize) -> Result<Row> {
        let mut cells = Row::new();
        for row in &self.rows {
            match row.get(index) {
                Some(value) => cells.push(value.clone()),
                None => return Err(Error::index_out_of_bounds(index, row.len())),
            }
        }
        Ok(cells)
    }

    /// Gathers the column named `name` into a column vector.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` if no column has that name, otherwise
    /// reports as [`Table::column`].
    pub fn column_by_name(&self, name: &str) -> Result<Row> {
        match self.column_index.get(name) {
            Some(&index) => self.column(index),
            None => Err(Error::column_not_found(name)),
        }
    }

    /// Appends a row. Neither name index is touched.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Appends a column name.
    ///
    /// The name list and its index entry move together; no lookup can
    /// observe a name without its index. A duplicate name rebinds the
    /// index entry to the new position.
    pub fn add_column(&mut self, name: impl Into<Arc<str>>) {
        let name = name.into();
        self.column_index.insert(name.clone(), self.column_names.len());
        self.column_names.push(name);
    }

    /// Registers `key` as a logical name for the row at `index`.
    ///
    /// The position is not validated here; it is checked on every
    /// lookup, so a key may be registered before its row exists.
    pub fn set_row_key(&mut self, key: impl Into<Arc<str>>, index: usize) {
        self.row_key_index.insert(key.into(), index);
    }
}

impl Index<usize> for Table {
    type Output = Row;

    /// Unchecked positional access, like slice indexing.
    ///
    /// Panics if `index` is out of range; [`Table::row`] is the checked
    /// form.
    fn index(&self, index: usize) -> &Row {
        &self.rows[index]
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::from_rows(iter)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for row in &self.rows {
            writeln!(f, "  {row},")?;
        }
        write!(f, "}}")
    }
}
