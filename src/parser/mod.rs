//! Input file parser
//!
//! This module transforms the raw input text into the data model:
//! - [`diagram`]: the leading stack diagram (crate rows + label row) →
//!   [`StackStore`](crate::yard::store::StackStore)
//! - [`moves`]: the trailing instruction block → ordered [`moves::Move`] list
//!
//! # Input Format
//!
//! The two blocks are separated by a single blank line:
//!
//! ```text
//!     [D]
//! [N] [C]
//! [Z] [M] [P]
//!  1   2   3
//!
//! move 1 from 2 to 1
//! move 3 from 1 to 3
//! ```
//!
//! Any parse failure aborts the run before a single move is applied; no
//! partial output is ever produced from a malformed file.
//!
//! # Parser Implementation
//!
//! Hand-written line scanners, no external parser dependencies.  Column
//! positions are derived from the label row rather than assumed from a fixed
//! stride, so the diagram parser is independent of the 4-character layout
//! the format happens to use.

pub mod diagram;
pub mod moves;

use crate::yard::store::StackStore;
use moves::Move;
use std::fmt;

/// Format error raised by either parser.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    /// 1-based line number in the input file.
    pub line: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Fully parsed input: the initial yard plus the move list in file order.
#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub store: StackStore,
    pub moves: Vec<Move>,
}

/// Parse a complete input file: diagram block, blank separator, move block.
pub fn parse_input(source: &str) -> Result<ParsedInput, ParseError> {
    let lines: Vec<&str> = source.lines().collect();

    let separator = lines
        .iter()
        .position(|line| line.trim().is_empty())
        .ok_or_else(|| ParseError {
            message: "missing blank separator between diagram and moves".to_string(),
            line: lines.len().max(1),
        })?;

    let store = diagram::parse_diagram(&lines[..separator])?;
    let moves = moves::parse_moves(&lines[separator + 1..], separator + 1)?;

    Ok(ParsedInput { store, moves })
}
