//! Mutable simulation grid
//!
//! [`SimGrid`] is the working representation the engine mutates: one
//! independently growable row per stack, bottom-to-top, with O(1) push and
//! pop at the top.  Rows grow on demand, so no stack can overflow no matter
//! how many crates a move sequence piles onto it.
//!
//! A grid is created by [`SimGrid::expand`]ing a
//! [`StackStore`](super::store::StackStore) and turned back into one with
//! [`SimGrid::compact`]; the round trip is lossless.

use super::store::StackStore;
use super::Label;

/// Per-stack mutable rows, owned exclusively by the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimGrid {
    rows: Vec<Vec<Label>>,
}

impl SimGrid {
    /// Expand a compact store into independent mutable rows.
    pub fn expand(store: &StackStore) -> Self {
        let rows = store.stacks().map(|stack| stack.to_vec()).collect();
        SimGrid { rows }
    }

    /// Compact the grid back into a fresh offset-table store.
    pub fn compact(&self) -> StackStore {
        StackStore::from_stacks(&self.rows)
    }

    /// Number of stacks.
    pub fn stack_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of crates across all rows.
    pub fn total_crates(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Height of stack `index`.
    pub fn height(&self, index: usize) -> usize {
        self.rows[index].len()
    }

    /// Stack `index` as a bottom-to-top slice.
    pub fn row(&self, index: usize) -> &[Label] {
        &self.rows[index]
    }

    /// Top crate of stack `index`, or `None` for an empty stack.
    pub fn top(&self, index: usize) -> Option<Label> {
        self.rows[index].last().copied()
    }

    /// Push a crate on top of stack `index`.
    pub fn push(&mut self, index: usize, label: Label) {
        self.rows[index].push(label);
    }

    /// Pop the top crate of stack `index`, or `None` for an empty stack.
    pub fn pop(&mut self, index: usize) -> Option<Label> {
        self.rows[index].pop()
    }

    /// Remove the top `count` crates of stack `index` as one block,
    /// preserving their bottom-to-top order.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the stack's height; the engine checks
    /// heights before transferring.
    pub fn take_block(&mut self, index: usize, count: usize) -> Vec<Label> {
        let row = &mut self.rows[index];
        row.split_off(row.len() - count)
    }

    /// Place a block of crates on top of stack `index`, preserving order.
    pub fn place_block(&mut self, index: usize, block: Vec<Label>) {
        self.rows[index].extend(block);
    }

    /// Tallest stack height; used by the dump and yard-pane layouts.
    pub fn max_height(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> StackStore {
        StackStore::from_stacks(&[
            vec!['Z', 'N'],
            vec!['M', 'C', 'D'],
            vec![],
        ])
    }

    #[test]
    fn test_expand_preserves_order() {
        let grid = SimGrid::expand(&sample_store());

        assert_eq!(grid.stack_count(), 3);
        assert_eq!(grid.row(0), &['Z', 'N']);
        assert_eq!(grid.row(1), &['M', 'C', 'D']);
        assert_eq!(grid.height(2), 0);
        assert_eq!(grid.total_crates(), 5);
    }

    #[test]
    fn test_round_trip() {
        let store = sample_store();
        let grid = SimGrid::expand(&store);

        assert_eq!(grid.compact(), store);
    }

    #[test]
    fn test_push_pop() {
        let mut grid = SimGrid::expand(&sample_store());

        assert_eq!(grid.pop(0), Some('N'));
        grid.push(2, 'N');
        assert_eq!(grid.row(0), &['Z']);
        assert_eq!(grid.row(2), &['N']);
        assert_eq!(grid.pop(2), Some('N'));
        assert_eq!(grid.pop(2), None);
    }

    #[test]
    fn test_take_and_place_block() {
        let mut grid = SimGrid::expand(&sample_store());

        let block = grid.take_block(1, 2);
        assert_eq!(block, vec!['C', 'D']);
        assert_eq!(grid.row(1), &['M']);

        grid.place_block(0, block);
        assert_eq!(grid.row(0), &['Z', 'N', 'C', 'D']);
    }

    #[test]
    fn test_mutation_does_not_alias_store() {
        let store = sample_store();
        let mut grid = SimGrid::expand(&store);

        grid.pop(1);
        grid.pop(1);

        // The store the grid was expanded from is untouched.
        assert_eq!(store.stack(1), &['M', 'C', 'D']);
    }
}
