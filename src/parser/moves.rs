//! Move instruction parser
//!
//! Turns the trailing text block into an ordered list of [`Move`]s.  One
//! instruction per line, `move <count> from <source> to <dest>`, with
//! 1-indexed stack numbers in the text converted to 0-indexed on ingestion.
//!
//! Lines that do not start with the `move` keyword are skipped; a line that
//! does but then fails the grammar (missing keywords, unparsable numbers, a
//! zero count or stack number) is a [`ParseError`].  File order is preserved
//! — the engine depends on it.

use super::ParseError;
use std::fmt;

/// One rearrangement instruction, stack indices already 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Number of crates to transfer; always positive.
    pub count: usize,
    pub source: usize,
    pub dest: usize,
}

impl Move {
    pub fn new(count: usize, source: usize, dest: usize) -> Self {
        Move {
            count,
            source,
            dest,
        }
    }
}

impl fmt::Display for Move {
    /// Canonical instruction text, with 1-indexed stack numbers as written.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {} from {} to {}",
            self.count,
            self.source + 1,
            self.dest + 1
        )
    }
}

/// Parse the move block.  `line_offset` is the number of input lines before
/// `lines`, so errors can report absolute line numbers.
pub fn parse_moves(lines: &[&str], line_offset: usize) -> Result<Vec<Move>, ParseError> {
    let mut moves = Vec::new();

    for (index, raw) in lines.iter().enumerate() {
        let line = line_offset + index + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        // Not an instruction at all: skipped, not counted as a move.
        if tokens.first() != Some(&"move") {
            continue;
        }

        if tokens.len() != 6 || tokens[2] != "from" || tokens[4] != "to" {
            return Err(ParseError {
                message: format!("malformed move instruction '{}'", raw.trim()),
                line,
            });
        }

        let count = parse_field(tokens[1], "crate count", line)?;
        if count == 0 {
            return Err(ParseError {
                message: "crate count must be positive".to_string(),
                line,
            });
        }

        let source = parse_field(tokens[3], "source stack", line)?;
        let dest = parse_field(tokens[5], "destination stack", line)?;
        if source == 0 || dest == 0 {
            return Err(ParseError {
                message: "stack numbers are 1-indexed".to_string(),
                line,
            });
        }

        moves.push(Move::new(count, source - 1, dest - 1));
    }

    Ok(moves)
}

fn parse_field(token: &str, what: &str, line: usize) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError {
        message: format!("unparsable {} '{}'", what, token),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instruction() {
        let moves = parse_moves(&["move 3 from 1 to 2"], 0).unwrap();

        assert_eq!(moves, vec![Move::new(3, 0, 1)]);
    }

    #[test]
    fn test_file_order_preserved() {
        let lines = ["move 1 from 2 to 1", "move 3 from 1 to 3"];
        let moves = parse_moves(&lines, 0).unwrap();

        assert_eq!(moves[0], Move::new(1, 1, 0));
        assert_eq!(moves[1], Move::new(3, 0, 2));
    }

    #[test]
    fn test_non_matching_lines_skipped() {
        let lines = ["", "# comment", "shift 2 from 1 to 2", "move 1 from 1 to 2"];
        let moves = parse_moves(&lines, 0).unwrap();

        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn test_unparsable_count() {
        let err = parse_moves(&["move x from 1 to 2"], 0).unwrap_err();

        assert!(err.message.contains("crate count"), "got: {}", err);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_missing_keywords() {
        let err = parse_moves(&["move 1 at 1 to 2"], 0).unwrap_err();

        assert!(err.message.contains("malformed move"), "got: {}", err);
    }

    #[test]
    fn test_zero_count_rejected() {
        let err = parse_moves(&["move 0 from 1 to 2"], 0).unwrap_err();

        assert!(err.message.contains("positive"), "got: {}", err);
    }

    #[test]
    fn test_zero_stack_number_rejected() {
        let err = parse_moves(&["move 1 from 0 to 2"], 0).unwrap_err();

        assert!(err.message.contains("1-indexed"), "got: {}", err);
    }

    #[test]
    fn test_line_offset_in_errors() {
        let err = parse_moves(&["move ? from 1 to 2"], 5).unwrap_err();

        assert_eq!(err.line, 6);
    }

    #[test]
    fn test_display_round_trips_text() {
        let mv = Move::new(2, 0, 2);

        assert_eq!(mv.to_string(), "move 2 from 1 to 3");
    }
}
