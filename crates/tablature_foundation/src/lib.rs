//! Core types, values, and rows for tablature.
//!
//! This crate provides:
//! - [`Value`] - The tagged-union cell type (five fixed kinds)
//! - [`Row`] - An ordered sequence of values representing one record
//! - [`Kind`] / [`Class`] - Exact and coarse value classification
//! - [`Error`] - Recoverable error values with the index/type/not-found taxonomy
//! - [`TabVec`] - Persistent vector backing rows and text lists

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod row;
pub mod value;

pub use collections::TabVec;
pub use error::{Error, ErrorKind, Result};
pub use row::Row;
pub use value::{Class, Kind, Value};
