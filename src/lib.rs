//! # Introduction
//!
//! Stackyard parses a fixed-width ASCII diagram of labeled cargo stacks plus
//! an ordered list of `move` instructions, simulates the rearrangement, and
//! reports the top crate of each stack.  Every move is snapshotted, so the
//! whole run can be stepped forward and backward through a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input text → DiagramParser → StackStore → expand → SimGrid
//!            → MoveListParser → Moves     → Engine → Snapshots
//!            → compact → StackStore → TopCrateReporter → report
//! ```
//!
//! 1. [`parser`] — splits the input into the diagram block and the move
//!    block and builds the data model from each.
//! 2. [`yard`] — the stack model: a compact at-rest [`yard::store::StackStore`]
//!    (offset table + flat label buffer) and a mutable
//!    [`yard::grid::SimGrid`] used only during simulation.
//! 3. [`engine`] — applies the moves strictly in file order through a
//!    pluggable [`engine::crane::Crane`], capturing a [`snapshot::Snapshot`]
//!    after each move and checking crate conservation throughout.
//! 4. [`report`] — extracts the top crate (or an explicit empty sentinel)
//!    of every stack from the final store.
//! 5. [`ui`] — ratatui-based step-through TUI; not part of the stable
//!    library API.
//!
//! ## Crane semantics
//!
//! Two historically distinct crane behaviors exist for this kind of yard:
//! moving crates one at a time (which reverses the moved block) and lifting
//! a block as a unit (which preserves it).  Both are implemented behind the
//! [`engine::crane::Crane`] trait and selected on the command line.

pub mod engine;
pub mod parser;
pub mod report;
pub mod snapshot;
pub mod ui;
pub mod yard;
