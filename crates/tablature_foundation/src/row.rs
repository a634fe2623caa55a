//! Ordered rows of heterogeneous values.
//!
//! A [`Row`] is the unit every table operation and transform works in:
//! an ordered sequence of [`Value`]s addressed by position. Backing the
//! cells with [`TabVec`] keeps clones O(1), which the replication and
//! broadcast transforms lean on heavily.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::TabVec;
use crate::error::{Error, Result};
use crate::value::Value;

/// An ordered sequence of values.
///
/// Cells are addressed by position. The checked accessors report
/// out-of-range positions as errors instead of panicking, so a bad
/// index is recoverable even under `panic = "abort"`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    values: TabVec<Value>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: TabVec::new(),
        }
    }

    /// Creates a row from an iterable of values.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets the value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Gets the value at `index`, reporting an error when out of range.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfBounds`](crate::ErrorKind::IndexOutOfBounds)
    /// if `index` is past the last cell.
    pub fn at(&self, index: usize) -> Result<&Value> {
        self.get(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, self.len()))
    }

    /// Returns the text at position `item` inside the text-list cell at
    /// position `index`.
    ///
    /// This is the two-level dereference used when a cell holds a list:
    /// first the cell is resolved, then the entry within it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfBounds`](crate::ErrorKind::IndexOutOfBounds)
    /// if either index is out of range, and
    /// [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch) if the
    /// cell is not a text list. `unwrap_or_default()` on the result gives
    /// the empty-text convention.
    pub fn text_at(&self, index: usize, item: usize) -> Result<&str> {
        self.at(index)?.text_at(item)
    }

    /// Replaces the value at `index`.
    ///
    /// The row's shape never changes through `set`; only `push` grows it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfBounds`](crate::ErrorKind::IndexOutOfBounds)
    /// if `index` is past the last cell. The row is left untouched.
    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        match self.values.update(index, value) {
            Some(values) => {
                self.values = values;
                Ok(())
            }
            None => Err(Error::index_out_of_bounds(index, self.len())),
        }
    }

    /// Appends a value to the end of the row.
    pub fn push(&mut self, value: Value) {
        self.values = self.values.push_back(value);
    }

    /// Returns an iterator over the cells.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Returns a read-only view of the underlying cell sequence.
    #[must_use]
    pub const fn values(&self) -> &TabVec<Value> {
        &self.values
    }

    /// Consumes the row, returning the underlying cell sequence.
    #[must_use]
    pub fn into_values(self) -> TabVec<Value> {
        self.values
    }
}

impl FromIterator<Value> for Row {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Row {
    /// Lifts a fixed-size array into a row, preserving order and kind.
    fn from(values: [T; N]) -> Self {
        values.into_iter().map(Into::into).collect()
    }
}

impl IntoIterator for Row {
    type Item = Value;
    type IntoIter = im::vector::ConsumingIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.values).into_iter()
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, " }}")
    }
}
