//! Cross-layer integration tests for tablature
//!
//! Tests that verify correct interaction between the foundation, grid,
//! and transform crates.
