#![allow(dead_code)] // Complete API module, not all methods currently used
//! Compact at-rest stack storage
//!
//! [`StackStore`] keeps every stack in one flat label buffer addressed
//! through an offset table, the same shape a CSR matrix uses for its rows:
//! stack `i` occupies `labels[offsets[i]..offsets[i + 1]]`, bottom-to-top.
//!
//! # Invariants
//!
//! - `offsets.len() == stack_count() + 1`
//! - `offsets[0] == 0` and the offsets are non-decreasing
//! - `offsets[stack_count()]` equals the total crate count
//!
//! The store is read-only after construction; simulation happens on an
//! expanded [`SimGrid`](super::grid::SimGrid), which is compacted back into
//! a fresh store afterwards.

use super::Label;

/// All stacks in the yard, encoded as an offset table over one flat buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackStore {
    offsets: Vec<usize>,
    labels: Vec<Label>,
}

impl StackStore {
    /// Build a store from per-stack label sequences (bottom-to-top).
    pub fn from_stacks(stacks: &[Vec<Label>]) -> Self {
        let mut offsets = Vec::with_capacity(stacks.len() + 1);
        let mut labels = Vec::new();

        offsets.push(0);
        for stack in stacks {
            labels.extend_from_slice(stack);
            offsets.push(labels.len());
        }

        StackStore { offsets, labels }
    }

    /// Number of stacks in the yard.
    pub fn stack_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of crates across all stacks.
    pub fn total_crates(&self) -> usize {
        self.labels.len()
    }

    /// Stack `index` as a bottom-to-top slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= stack_count()`.
    pub fn stack(&self, index: usize) -> &[Label] {
        &self.labels[self.offsets[index]..self.offsets[index + 1]]
    }

    /// Height of stack `index`.
    pub fn height(&self, index: usize) -> usize {
        self.offsets[index + 1] - self.offsets[index]
    }

    /// Top crate of stack `index`, or `None` for an empty stack.
    pub fn top(&self, index: usize) -> Option<Label> {
        self.stack(index).last().copied()
    }

    /// Iterate over all stacks in increasing index order.
    pub fn stacks(&self) -> impl Iterator<Item = &[Label]> {
        (0..self.stack_count()).map(move |i| self.stack(i))
    }
}
