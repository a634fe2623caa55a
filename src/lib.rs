//! Tablature - Heterogeneous-value tables with rotation and broadcast
//! transforms
//!
//! This crate re-exports all layers of the tablature system for
//! convenient access. For detailed documentation, see the individual
//! layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tablature_transform  — Rotation, broadcast, conversion
//! Layer 1: tablature_grid       — Table container with named axes
//! Layer 0: tablature_foundation — Core types (Value, Row, Error)
//! ```

pub use tablature_foundation as foundation;
pub use tablature_grid as grid;
pub use tablature_transform as transform;
