//! Stack diagram parser
//!
//! Turns the leading text block — crate rows followed by one label row —
//! into a [`StackStore`].  The label row determines both the stack count and
//! the byte column each stack occupies, so the parser never assumes the
//! 4-character stride the format conventionally uses:
//!
//! ```text
//!     [D]        ← crate rows, blank cell = stack not this tall
//! [N] [C]
//! [Z] [M] [P]
//!  1   2   3     ← label row: stack numbers give S and the cell columns
//! ```
//!
//! Cells are collected bottom-to-top per column.  A stack with no occupied
//! cells is a legal, empty stack.

use super::ParseError;
use crate::yard::store::StackStore;
use crate::yard::Label;

/// Parse the diagram block (everything before the blank separator).
///
/// `lines` must contain at least the label row; the last line is taken as
/// the label row and every line above it as a crate row.
pub fn parse_diagram(lines: &[&str]) -> Result<StackStore, ParseError> {
    let (label_row, crate_rows) = match lines.split_last() {
        Some(split) => split,
        None => {
            return Err(ParseError {
                message: "empty diagram block".to_string(),
                line: 1,
            })
        }
    };
    let label_line = lines.len();

    let columns = parse_label_row(label_row, label_line)?;

    let mut stacks: Vec<Vec<Label>> = vec![Vec::new(); columns.len()];
    for (stack, &column) in columns.iter().enumerate() {
        // Bottom-to-top: the row just above the label row is the bottom.
        for (row_index, row) in crate_rows.iter().enumerate().rev() {
            if let Some(label) = parse_cell(row, column, row_index + 1)? {
                stacks[stack].push(label);
            }
        }
    }

    Ok(StackStore::from_stacks(&stacks))
}

/// Parse the label row into per-stack byte columns.
///
/// Labels must read `1, 2, ..., S` left to right; anything else means the
/// line taken as the label row was not one.
fn parse_label_row(row: &str, line: usize) -> Result<Vec<usize>, ParseError> {
    let mut columns = Vec::new();
    let mut token_start: Option<usize> = None;
    let mut token = String::new();

    let bytes = row.as_bytes();
    for position in 0..=bytes.len() {
        let ch = bytes.get(position).copied().unwrap_or(b' ');
        if ch != b' ' {
            if token_start.is_none() {
                token_start = Some(position);
            }
            token.push(ch as char);
        } else if let Some(start) = token_start.take() {
            let number: usize = token.parse().map_err(|_| ParseError {
                message: format!("unparsable stack label '{}'", token),
                line,
            })?;
            if number != columns.len() + 1 {
                return Err(ParseError {
                    message: format!(
                        "stack labels must count up from 1, found '{}' in position {}",
                        token,
                        columns.len() + 1
                    ),
                    line,
                });
            }
            columns.push(start);
            token.clear();
        }
    }

    if columns.is_empty() {
        return Err(ParseError {
            message: "label row names no stacks".to_string(),
            line,
        });
    }

    Ok(columns)
}

/// Read one cell of a crate row at the given byte column.
///
/// Returns `Ok(None)` for a blank cell (line too short, or a space under the
/// label).  A non-blank cell must be bracketed `[X]`.
fn parse_cell(row: &str, column: usize, line: usize) -> Result<Option<Label>, ParseError> {
    let bytes = row.as_bytes();
    let cell = match bytes.get(column) {
        None | Some(b' ') => return Ok(None),
        Some(&byte) => byte as char,
    };

    let open = column.checked_sub(1).and_then(|i| bytes.get(i));
    let close = bytes.get(column + 1);
    if open != Some(&b'[') || close != Some(&b']') {
        return Err(ParseError {
            message: format!("malformed crate cell '{}' at column {}", cell, column),
            line,
        });
    }

    Ok(Some(cell))
}
