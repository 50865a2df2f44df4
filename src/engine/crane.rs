//! Crane transfer strategies
//!
//! Two historically distinct crane behaviors exist for a yard like this:
//!
//! - [`CrateByCrate`]: the crane lifts one crate at a time, so a transferred
//!   block ends up **reversed** on the destination stack
//! - [`BulkLift`]: the crane lifts the whole block in one motion, so its
//!   order is **preserved**
//!
//! Both are implemented behind the [`Crane`] trait; the engine validates the
//! move (index range, underflow) before a crane ever touches the grid, so
//! implementations only perform the mechanics.

use crate::parser::moves::Move;
use crate::yard::grid::SimGrid;

/// A move-application strategy.
pub trait Crane {
    /// Human-readable name for diagnostics and the status bar.
    fn name(&self) -> &'static str;

    /// Transfer `mv.count` crates from `mv.source` to `mv.dest`.
    ///
    /// The caller guarantees both indices are in range and the source holds
    /// at least `mv.count` crates.
    fn transfer(&self, grid: &mut SimGrid, mv: &Move);
}

/// One crate at a time: pop from source, push to destination, repeated.
/// Reverses the relative order of the moved block.
pub struct CrateByCrate;

impl Crane for CrateByCrate {
    fn name(&self) -> &'static str {
        "crate-by-crate"
    }

    fn transfer(&self, grid: &mut SimGrid, mv: &Move) {
        for _ in 0..mv.count {
            // Height was validated by the engine, so the pop cannot miss.
            if let Some(label) = grid.pop(mv.source) {
                grid.push(mv.dest, label);
            }
        }
    }
}

/// The whole block in one motion, preserving its order.
pub struct BulkLift;

impl Crane for BulkLift {
    fn name(&self) -> &'static str {
        "bulk-lift"
    }

    fn transfer(&self, grid: &mut SimGrid, mv: &Move) {
        let block = grid.take_block(mv.source, mv.count);
        grid.place_block(mv.dest, block);
    }
}
