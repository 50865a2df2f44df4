#![allow(dead_code)] // Complete API module, not all methods currently used
// Snapshot management for stepping back and forth through the move history

use crate::parser::moves::Move;
use crate::yard::grid::SimGrid;

/// Grid state after a given number of moves have been applied.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub grid: SimGrid,
    /// How many moves have been applied to reach this state; snapshot 0 is
    /// the initial yard.
    pub moves_applied: usize,
    /// The move that produced this state, `None` for the initial snapshot.
    pub last_move: Option<Move>,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // This is a rough estimate: one byte per crate plus a fixed
        // per-row overhead for the Vec headers.
        let crates = self.grid.total_crates();
        let rows = self.grid.stack_count() * 32;

        crates + rows + std::mem::size_of::<Snapshot>()
    }
}

/// Records one snapshot per applied move, within a memory budget.
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history.  Fails if the memory budget would be
    /// exceeded; the caller surfaces that as a simulation error.
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), (usize, usize)> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err((self.current_memory, self.max_memory));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
