//! Named-axis table container for tablature rows.
//!
//! This crate provides:
//! - [`Table`] - Ordered rows with optional column names, a
//!   column-name index, and a caller-populated row-key index

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod table;

pub use table::Table;
