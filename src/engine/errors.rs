//! Simulation error types
//!
//! This module defines [`SimError`], which represents all errors that can
//! occur while applying moves (as opposed to parse errors or file errors).
//!
//! All simulation errors are fatal - they halt the run and no report is
//! produced.

use std::fmt;

/// Errors raised while applying moves or navigating the history.
#[derive(Debug, Clone)]
pub enum SimError {
    /// A move requested more crates than its source stack holds.
    Underflow {
        move_index: usize,
        requested: usize,
        available: usize,
        stack: usize,
    },

    /// A move named a stack index outside `[0, stack_count)`.
    UnknownStack {
        move_index: usize,
        stack: usize,
        stack_count: usize,
    },

    /// Crate conservation was violated: the yard's contents changed in
    /// total count or label census across a move sequence.
    ConservationBroken { detail: String },

    /// Snapshot history memory limit exceeded.
    HistoryLimitExceeded { current: usize, limit: usize },

    /// Attempted to step forward past the last snapshot.
    AtEndOfHistory,

    /// Attempted to step backward past the first snapshot.
    AtStartOfHistory,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Underflow {
                move_index,
                requested,
                available,
                stack,
            } => {
                write!(
                    f,
                    "Move {} requests {} crate(s) from stack {} which holds only {}",
                    move_index + 1,
                    requested,
                    stack + 1,
                    available
                )
            }
            SimError::UnknownStack {
                move_index,
                stack,
                stack_count,
            } => {
                write!(
                    f,
                    "Move {} names stack {} but the yard has only {} stack(s)",
                    move_index + 1,
                    stack + 1,
                    stack_count
                )
            }
            SimError::ConservationBroken { detail } => {
                write!(f, "Crate conservation violated: {}", detail)
            }
            SimError::HistoryLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            SimError::AtEndOfHistory => {
                write!(f, "Already at the end of the move history")
            }
            SimError::AtStartOfHistory => {
                write!(f, "Already at the start of the move history")
            }
        }
    }
}

impl std::error::Error for SimError {}
