//! Move engine
//!
//! This module applies the parsed move list to the yard:
//! - [`Engine`]: expands the store into a grid, applies every move strictly
//!   in file order, and records a [`Snapshot`](crate::snapshot::Snapshot)
//!   after each one so the run can be replayed step by step
//! - [`crane`]: the two transfer strategies (one crate at a time vs. whole
//!   block at once)
//! - [`errors`]: the simulation error taxonomy
//!
//! # Ordering
//!
//! Later moves operate on the cumulative result of all prior moves, so the
//! engine never reorders or batches them.
//!
//! # Conservation
//!
//! Well-formed input cannot change the number of crates in the yard, but the
//! engine checks rather than assumes: the total count is verified after
//! every move and the full per-label census is compared once the run
//! finishes.

pub mod crane;
pub mod errors;

use crate::parser::moves::Move;
use crate::snapshot::{Snapshot, SnapshotManager};
use crate::yard::grid::SimGrid;
use crate::yard::store::StackStore;
use crate::yard::Label;
use crane::Crane;
use errors::SimError;
use rustc_hash::FxHashMap;

/// Count crates per label across the whole grid.
fn label_census(grid: &SimGrid) -> FxHashMap<Label, usize> {
    let mut census = FxHashMap::default();
    for stack in 0..grid.stack_count() {
        for &label in grid.row(stack) {
            *census.entry(label).or_insert(0) += 1;
        }
    }
    census
}

/// Applies a move list to a yard and holds the resulting history.
pub struct Engine {
    grid: SimGrid,
    moves: Vec<Move>,
    crane: Box<dyn Crane>,
    history: SnapshotManager,
    position: usize,
}

impl Engine {
    /// Create an engine over a fresh expansion of `store`.  Nothing is
    /// applied until [`Engine::run`] is called.
    pub fn new(
        store: &StackStore,
        moves: Vec<Move>,
        crane: Box<dyn Crane>,
        snapshot_limit: usize,
    ) -> Self {
        Engine {
            grid: SimGrid::expand(store),
            moves,
            crane,
            history: SnapshotManager::new(snapshot_limit),
            position: 0,
        }
    }

    /// Apply every move in file order, building the snapshot history.
    ///
    /// On success the engine is positioned at the final state; use
    /// [`Engine::rewind_to_start`] before stepping through the run.  Any
    /// error leaves no report-worthy state behind.
    pub fn run(&mut self) -> Result<(), SimError> {
        let census_before = label_census(&self.grid);

        self.record(0, None)?;

        for index in 0..self.moves.len() {
            let mv = self.moves[index];
            self.check_move(index, &mv)?;

            let total_before = self.grid.total_crates();
            self.crane.transfer(&mut self.grid, &mv);
            let total_after = self.grid.total_crates();

            if total_before != total_after {
                return Err(SimError::ConservationBroken {
                    detail: format!(
                        "total crate count changed from {} to {} after move {}",
                        total_before,
                        total_after,
                        index + 1
                    ),
                });
            }

            self.record(index + 1, Some(mv))?;
        }

        if label_census(&self.grid) != census_before {
            return Err(SimError::ConservationBroken {
                detail: "label census changed across the run".to_string(),
            });
        }

        self.position = self.history.len() - 1;
        Ok(())
    }

    /// Validate a move against the current grid before it is applied.
    fn check_move(&self, index: usize, mv: &Move) -> Result<(), SimError> {
        let stack_count = self.grid.stack_count();
        for stack in [mv.source, mv.dest] {
            if stack >= stack_count {
                return Err(SimError::UnknownStack {
                    move_index: index,
                    stack,
                    stack_count,
                });
            }
        }

        let available = self.grid.height(mv.source);
        if mv.count > available {
            return Err(SimError::Underflow {
                move_index: index,
                requested: mv.count,
                available,
                stack: mv.source,
            });
        }

        Ok(())
    }

    fn record(&mut self, moves_applied: usize, last_move: Option<Move>) -> Result<(), SimError> {
        self.history
            .push(Snapshot {
                grid: self.grid.clone(),
                moves_applied,
                last_move,
            })
            .map_err(|(current, limit)| SimError::HistoryLimitExceeded { current, limit })
    }

    /// Compact the end state of the run back into a store.
    pub fn final_store(&self) -> StackStore {
        self.grid.compact()
    }

    /// The grid at the current history position (the working grid if the
    /// engine has not run yet).
    pub fn grid(&self) -> &SimGrid {
        match self.history.get(self.position) {
            Some(snapshot) => &snapshot.grid,
            None => &self.grid,
        }
    }

    /// The move that produced the current history position, `None` at the
    /// initial snapshot.
    pub fn current_move(&self) -> Option<Move> {
        self.history
            .get(self.position)
            .and_then(|snapshot| snapshot.last_move)
    }

    /// Step to the next snapshot.
    pub fn step_forward(&mut self) -> Result<(), SimError> {
        if self.position + 1 >= self.history.len() {
            return Err(SimError::AtEndOfHistory);
        }
        self.position += 1;
        Ok(())
    }

    /// Step to the previous snapshot.
    pub fn step_backward(&mut self) -> Result<(), SimError> {
        if self.position == 0 {
            return Err(SimError::AtStartOfHistory);
        }
        self.position -= 1;
        Ok(())
    }

    /// Jump back to the initial snapshot.
    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    /// Jump to the last snapshot.
    pub fn jump_to_end(&mut self) {
        if !self.history.is_empty() {
            self.position = self.history.len() - 1;
        }
    }

    /// Current history position (0 = initial yard).
    pub fn history_position(&self) -> usize {
        self.position
    }

    /// Total number of snapshots (moves applied + 1 once run).
    pub fn total_snapshots(&self) -> usize {
        self.history.len()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn crane_name(&self) -> &'static str {
        self.crane.name()
    }
}

#[cfg(test)]
mod tests {
    use super::crane::{BulkLift, CrateByCrate};
    use super::*;

    const LIMIT: usize = 1024 * 1024;

    fn sample_store() -> StackStore {
        StackStore::from_stacks(&[
            vec!['Z', 'N'],
            vec!['M', 'C', 'D'],
            vec!['P'],
        ])
    }

    fn sample_moves() -> Vec<Move> {
        vec![
            Move::new(1, 1, 0),
            Move::new(3, 0, 2),
            Move::new(2, 1, 0),
            Move::new(1, 0, 1),
        ]
    }

    fn tops(store: &StackStore) -> Vec<Option<char>> {
        (0..store.stack_count()).map(|s| store.top(s)).collect()
    }

    #[test]
    fn test_sample_scenario_crate_by_crate() {
        let mut engine = Engine::new(
            &sample_store(),
            sample_moves(),
            Box::new(CrateByCrate),
            LIMIT,
        );
        engine.run().unwrap();

        let store = engine.final_store();
        assert_eq!(tops(&store), vec![Some('C'), Some('M'), Some('Z')]);
    }

    #[test]
    fn test_sample_scenario_bulk_lift() {
        let mut engine =
            Engine::new(&sample_store(), sample_moves(), Box::new(BulkLift), LIMIT);
        engine.run().unwrap();

        let store = engine.final_store();
        assert_eq!(tops(&store), vec![Some('M'), Some('C'), Some('D')]);
    }

    #[test]
    fn test_single_move() {
        let store = StackStore::from_stacks(&[vec!['Z', 'N'], vec![]]);
        let mut engine = Engine::new(
            &store,
            vec![Move::new(1, 0, 1)],
            Box::new(CrateByCrate),
            LIMIT,
        );
        engine.run().unwrap();

        let store = engine.final_store();
        assert_eq!(store.stack(0), &['Z']);
        assert_eq!(store.stack(1), &['N']);
    }

    #[test]
    fn test_empty_move_list_is_identity() {
        let store = sample_store();
        let mut engine = Engine::new(&store, Vec::new(), Box::new(CrateByCrate), LIMIT);
        engine.run().unwrap();

        assert_eq!(engine.final_store(), store);
    }

    #[test]
    fn test_conservation_across_run() {
        let store = sample_store();
        let mut engine = Engine::new(
            &store,
            sample_moves(),
            Box::new(CrateByCrate),
            LIMIT,
        );
        engine.run().unwrap();

        assert_eq!(engine.final_store().total_crates(), store.total_crates());
    }

    #[test]
    fn test_underflow_is_an_error() {
        let store = StackStore::from_stacks(&[vec!['A'], vec![]]);
        let mut engine = Engine::new(
            &store,
            vec![Move::new(2, 0, 1)],
            Box::new(CrateByCrate),
            LIMIT,
        );

        match engine.run() {
            Err(SimError::Underflow {
                requested,
                available,
                stack,
                ..
            }) => {
                assert_eq!(requested, 2);
                assert_eq!(available, 1);
                assert_eq!(stack, 0);
            }
            other => panic!("Expected underflow, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_unknown_stack_is_an_error() {
        let store = StackStore::from_stacks(&[vec!['A']]);
        let mut engine = Engine::new(
            &store,
            vec![Move::new(1, 0, 5)],
            Box::new(CrateByCrate),
            LIMIT,
        );

        assert!(matches!(
            engine.run(),
            Err(SimError::UnknownStack { stack: 5, .. })
        ));
    }

    #[test]
    fn test_source_equals_dest_is_noop() {
        let store = sample_store();
        let mut engine = Engine::new(
            &store,
            vec![Move::new(2, 1, 1)],
            Box::new(CrateByCrate),
            LIMIT,
        );
        engine.run().unwrap();

        assert_eq!(engine.final_store(), store);
    }

    #[test]
    fn test_stepping_through_history() {
        let mut engine = Engine::new(
            &sample_store(),
            sample_moves(),
            Box::new(CrateByCrate),
            LIMIT,
        );
        engine.run().unwrap();

        // run() leaves the engine at the end of the history.
        assert_eq!(engine.total_snapshots(), 5);
        assert_eq!(engine.history_position(), 4);
        assert!(matches!(
            engine.step_forward(),
            Err(SimError::AtEndOfHistory)
        ));

        engine.rewind_to_start();
        assert_eq!(engine.history_position(), 0);
        assert!(engine.current_move().is_none());
        assert!(matches!(
            engine.step_backward(),
            Err(SimError::AtStartOfHistory)
        ));

        engine.step_forward().unwrap();
        assert_eq!(engine.current_move(), Some(Move::new(1, 1, 0)));
        assert_eq!(engine.grid().row(0), &['Z', 'N', 'D']);

        engine.jump_to_end();
        assert_eq!(engine.history_position(), 4);
    }
}
