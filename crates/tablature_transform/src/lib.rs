//! Rotation, broadcast, and conversion transforms over tablature rows.
//!
//! This crate provides:
//! - [`rotate`] / [`rotate_to`] / [`rotate_excluding`] - cyclic rotation
//!   of a row to an [`Anchor`]
//! - [`spin_row`] / [`spin_table`] - exhaustive left rotations
//! - [`replicate_table`] / [`broadcast_table`] / [`broadcast_row`] -
//!   row and cell replication
//! - [`to_row`] / [`reverse_lookup`] / [`classify`] - conversions and
//!   index lookups
//!
//! All transforms are pure: inputs are taken by shared reference and
//! results are owned. An empty input row always yields an empty result,
//! never an error, so callers can feed unvalidated sequences straight
//! through a transform chain.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod broadcast;
pub mod convert;
pub mod rotate;

pub use broadcast::{broadcast_row, broadcast_table, replicate_table};
pub use convert::{classify, reverse_lookup, to_row};
pub use rotate::{Anchor, rotate, rotate_excluding, rotate_to, spin_row, spin_table};
