//! Conversions and index lookups.

use std::collections::HashMap;
use std::sync::Arc;

use tablature_foundation::{Class, Row, Value};

/// Lifts a fixed-size array into a row, preserving order and element
/// kind.
///
/// Accepts any element type with a [`Value`] conversion, so
/// `to_row([10, 20, 30])` builds a row of integers and
/// `to_row(["C", "D"])` a row of texts.
#[must_use]
pub fn to_row<T: Into<Value>, const N: usize>(values: [T; N]) -> Row {
    Row::from(values)
}

/// Finds a name mapping to `target` in a name-to-position index.
///
/// Returns `None` when no name maps there; `unwrap_or_default()` gives
/// the empty-text convention. When several names map to the same
/// position, which one is returned is unspecified (map iteration
/// order); callers must not rely on a particular choice.
#[must_use]
pub fn reverse_lookup(map: &HashMap<Arc<str>, usize>, target: usize) -> Option<&str> {
    for (name, &position) in map {
        if position == target {
            return Some(name);
        }
    }
    None
}

/// Classifies a value as integral, textual, or neither.
///
/// A standalone restatement of [`Value::class`] for transform
/// pipelines that pass functions around.
#[must_use]
pub fn classify(value: &Value) -> Class {
    value.class()
}
