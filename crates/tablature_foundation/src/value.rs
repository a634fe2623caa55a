//! Core value type for all tablature data.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::TabVec;
use crate::error::{Error, Result};

/// A single table cell: a closed sum type over exactly five kinds.
///
/// Values have value semantics: every copy is independent as far as the
/// API can observe. Clones are O(1) because text is reference-counted
/// and text lists use structural sharing.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float64(f64),
    /// 32-bit floating point.
    Float32(f32),
    /// Text value.
    Text(Arc<str>),
    /// Ordered list of text values.
    TextList(TabVec<Arc<str>>),
}

/// Exact kind tag for a [`Value`], one per variant.
///
/// Used in type-mismatch reports and wherever callers branch on the
/// active variant without needing the payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float64,
    /// 32-bit floating point.
    Float32,
    /// Text.
    Text,
    /// Ordered list of text values.
    TextList,
}

/// Coarse three-way classification used by rotation anchors.
///
/// Transforms that special-case numeric vs. textual anchors only care
/// whether a value is integral, textual, or neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Class {
    /// Integral value.
    Int,
    /// Textual value (a single text, not a list).
    Text,
    /// Neither integral nor textual: floats and text lists.
    Unknown,
}

impl Value {
    /// Returns the exact kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Float64(_) => Kind::Float64,
            Self::Float32(_) => Kind::Float32,
            Self::Text(_) => Kind::Text,
            Self::TextList(_) => Kind::TextList,
        }
    }

    /// Returns the coarse classification of this value.
    ///
    /// Integers classify as [`Class::Int`], single texts as
    /// [`Class::Text`], and everything else (both float widths and text
    /// lists) as [`Class::Unknown`].
    #[must_use]
    pub const fn class(&self) -> Class {
        match self {
            Self::Int(_) => Class::Int,
            Self::Text(_) => Class::Text,
            Self::Float64(_) | Self::Float32(_) | Self::TextList(_) => Class::Unknown,
        }
    }

    /// Returns true if this value is a text list.
    #[must_use]
    pub const fn is_text_list(&self) -> bool {
        matches!(self, Self::TextList(_))
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a 64-bit float value.
    #[must_use]
    pub const fn as_float64(&self) -> Option<f64> {
        match self {
            Self::Float64(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to extract a 32-bit float value.
    #[must_use]
    pub const fn as_float32(&self) -> Option<f32> {
        match self {
            Self::Float32(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to extract a text reference.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a text list reference.
    #[must_use]
    pub const fn as_text_list(&self) -> Option<&TabVec<Arc<str>>> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the held text list, or an empty list for any other kind.
    ///
    /// The empty fallback keeps callers that iterate unconditionally
    /// simple; use [`Value::as_text_list`] to distinguish "not a list"
    /// from "empty list".
    #[must_use]
    pub fn to_text_list(&self) -> TabVec<Arc<str>> {
        match self {
            Self::TextList(items) => items.clone(),
            _ => TabVec::new(),
        }
    }

    /// Returns the text at `index` within a text-list value.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch)
    /// if this value is not a text list, and
    /// [`ErrorKind::IndexOutOfBounds`](crate::ErrorKind::IndexOutOfBounds)
    /// if `index` is past the end of the list. Callers that want the
    /// empty-text convention can `unwrap_or_default()` the result.
    pub fn text_at(&self, index: usize) -> Result<&str> {
        let items = self
            .as_text_list()
            .ok_or_else(|| Error::type_mismatch(Kind::TextList, self.kind()))?;
        match items.get(index) {
            Some(text) => Ok(text),
            None => Err(Error::index_out_of_bounds(index, items.len())),
        }
    }
}

impl Default for Value {
    /// The default value is empty text.
    fn default() -> Self {
        Self::Text(Arc::from(""))
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a.to_bits() == b.to_bits(),
            (Self::Float32(a), Self::Float32(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::TextList(a), Self::TextList(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Int(n) => n.hash(state),
            Self::Float64(x) => x.to_bits().hash(state),
            Self::Float32(x) => x.to_bits().hash(state),
            Self::Text(s) => s.hash(state),
            Self::TextList(items) => items.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float64(x) => write!(f, "{x}"),
            Self::Float32(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::TextList(items) => write!(f, "{items:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float64(x) => write!(f, "{x}"),
            Self::Float32(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::TextList(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float64 => write!(f, "float64"),
            Self::Float32 => write!(f, "float32"),
            Self::Text => write!(f, "text"),
            Self::TextList => write!(f, "text-list"),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Text => write!(f, "string"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// Convenience From implementations

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float64(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float32(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::Text(s)
    }
}

impl From<TabVec<Arc<str>>> for Value {
    fn from(items: TabVec<Arc<str>>) -> Self {
        Self::TextList(items)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::TextList(items.into_iter().map(Arc::from).collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Self::TextList(items.into_iter().map(Arc::from).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Self::TextList(items.iter().copied().map(Arc::from).collect())
    }
}
