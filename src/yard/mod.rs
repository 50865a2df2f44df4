//! Stack model for the cargo yard
//!
//! This module provides the two representations a yard lives in:
//! - [`store`]: [`store::StackStore`], the compact at-rest encoding — an
//!   offset table over one flat label buffer
//! - [`grid`]: [`grid::SimGrid`], the mutable per-stack representation used
//!   only while moves are being applied
//!
//! # Representations
//!
//! The store is the sole authoritative at-rest form: it is built once by the
//! diagram parser and never mutated.  Simulation *expands* it into a grid,
//! mutates the grid, and *compacts* the grid back into a fresh store.  The
//! two never alias: mutating the grid cannot affect the store it was
//! expanded from.
//!
//! # Ordering convention
//!
//! Stacks are zero-indexed and stored bottom-to-top everywhere: index 0 of a
//! stack's slice (or grid row) is the bottom crate, the last element is the
//! top.

pub mod grid;
pub mod store;

/// A crate label: one printable character, no identity beyond the label.
pub type Label = char;
